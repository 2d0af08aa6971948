use serde::{Deserialize, Serialize};

/// Evaluation weights. All fields have defaults so a partial JSON config
/// overrides only what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base value of any piece on the board.
    pub val_man: i32,
    /// Added on top of `val_man` for a king.
    pub val_king_bonus: i32,
    /// Per piece sitting on one of the four central squares.
    pub val_center: i32,
    /// Per piece sitting in column 0 or 7.
    pub val_edge: i32,
    /// Per piece already on its own promotion row.
    pub val_back_rank: i32,
    /// Per capturable enemy piece across the mover's available jumps.
    pub val_capture_chance: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            val_man: 10,
            val_king_bonus: 30,
            val_center: 5,
            val_edge: 3,
            val_back_rank: 10,
            val_capture_chance: 15,
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}
