use std::sync::Arc;

use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Color, BOARD_SIZE};
use crate::logic::generator::MoveGenerator;

/// Material + positional heuristics, plus a tactical bonus for every enemy
/// piece the perspective side could currently jump.
pub struct MaterialEvaluator {
    config: Arc<EngineConfig>,
    generator: MoveGenerator,
}

impl MaterialEvaluator {
    #[must_use]
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            config,
            generator: MoveGenerator::new(),
        }
    }

    const fn is_central(row: usize, col: usize) -> bool {
        (row == 3 || row == 4) && (col == 3 || col == 4)
    }

    const fn is_edge_column(col: usize) -> bool {
        col == 0 || col == BOARD_SIZE - 1
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Color) -> i32 {
        let cfg = &self.config;
        let mut score = 0;

        for color in [perspective, perspective.opposite()] {
            let sign = if color == perspective { 1 } else { -1 };
            for piece in board.pieces(color) {
                let row = piece.square.row;
                let col = piece.square.col;

                score += sign * cfg.val_man;
                if piece.king {
                    score += sign * cfg.val_king_bonus;
                }
                if Self::is_central(row, col) {
                    score += sign * cfg.val_center;
                }
                if Self::is_edge_column(col) {
                    score += sign * cfg.val_edge;
                }
                if row == color.promotion_row() {
                    score += sign * cfg.val_back_rank;
                }
            }
        }

        // Reward available jumps, weighted by chain length.
        let mut capture_opportunities = 0;
        for piece in board.pieces(perspective) {
            for chain in self.generator.valid_moves(board, &piece).values() {
                capture_opportunities +=
                    i32::try_from(chain.len()).unwrap_or(0) * cfg.val_capture_chance;
            }
        }

        score + capture_opportunities
    }
}
