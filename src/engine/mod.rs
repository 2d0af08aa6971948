use serde::{Deserialize, Serialize};

use crate::logic::board::{Board, Color, Piece, Square};
use crate::logic::game::GameState;

pub mod config;
pub mod eval;
pub mod move_list;
pub mod search;


/// A move as produced by the generator and consumed by the board: source,
/// destination and the pieces jumped on the way, in jump order. Empty
/// `captured` means a simple move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Vec<Piece>,
}

impl Move {
    /// Number of pieces this move removes; used for move ordering.
    #[must_use]
    pub fn capture_len(&self) -> usize {
        self.captured.len()
    }
}

/// Search depth presets for the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::Easy => 3,
            Self::Medium => 5,
            Self::Hard => 7,
        }
    }

    /// Unknown names fall back to Medium.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

pub trait Evaluator {
    /// Static score of `board` from `perspective`'s point of view. Pure;
    /// never mutates the position.
    fn evaluate(&self, board: &Board, perspective: Color) -> i32;
}

pub trait Searcher {
    /// Picks a move for the engine's color in the given game state, or
    /// `None` when that color has no legal moves.
    fn search(&mut self, game: &GameState) -> Option<(Move, SearchStats)>;
}
