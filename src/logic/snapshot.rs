use serde::{Deserialize, Serialize};

use crate::logic::board::{Board, Color, Piece, Square};

/// One piece on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceState {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub king: bool,
}

/// The board snapshot relayed between remote players: the occupied cells
/// plus the four counters. Applying a snapshot fully replaces the local
/// grid and counters; there are no merge or diff semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pieces: Vec<PieceState>,
    pub light_remaining: u8,
    pub dark_remaining: u8,
    pub light_kings: u8,
    pub dark_kings: u8,
}

impl BoardSnapshot {
    #[must_use]
    pub fn capture(board: &Board) -> Self {
        let mut pieces = Vec::new();
        for color in [Color::Light, Color::Dark] {
            for piece in board.pieces(color) {
                pieces.push(PieceState {
                    row: piece.square.row,
                    col: piece.square.col,
                    color: piece.color,
                    king: piece.king,
                });
            }
        }
        Self {
            pieces,
            light_remaining: board.light_remaining,
            dark_remaining: board.dark_remaining,
            light_kings: board.light_kings,
            dark_kings: board.dark_kings,
        }
    }

    /// Rebuilds `board` from this snapshot. Pieces are re-added one by one,
    /// so the counters always end up consistent with the grid even if the
    /// snapshot's own counter fields were stale.
    pub fn restore(&self, board: &mut Board) {
        *board = Board::empty();
        for state in &self.pieces {
            let Some(square) = Square::new(state.row, state.col) else {
                continue;
            };
            board.add_piece(Piece {
                square,
                color: state.color,
                king: state.king,
            });
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
