use std::sync::Arc;
use std::time::Instant;

use rand::seq::SliceRandom;

use crate::engine::config::EngineConfig;
use crate::engine::eval::MaterialEvaluator;
use crate::engine::move_list::MoveList;
use crate::engine::{Difficulty, Evaluator, Move, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::game::GameState;
use crate::logic::generator::MoveGenerator;

/// Depth-limited minimax with alpha-beta pruning. The search mutates a
/// private clone of the position in place, undoing every application before
/// trying the next sibling; nothing outside the engine ever observes the
/// transient states.
pub struct AlphaBetaEngine {
    color: Color,
    depth: u8,
    evaluator: MaterialEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    #[must_use]
    pub fn new(color: Color, difficulty: Difficulty, config: Arc<EngineConfig>) -> Self {
        Self {
            color,
            depth: difficulty.depth(),
            evaluator: MaterialEvaluator::new(config),
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    /// Legal moves for `side`, longest capture chains first so pruning
    /// tightens the window early.
    fn generate_moves(&self, board: &Board, side: Color) -> MoveList {
        let mut moves = MoveList::from(self.generator.all_moves(board, side));
        moves.sort_by_captures();
        moves
    }

    /// Returns the subtree score (always from the engine's own color) and
    /// the best root move of the subtree. The move is `None` at terminal
    /// nodes and when every branch ties at the starting sentinel.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes_searched += 1;

        if depth == 0 || board.winner().is_some() {
            return (self.evaluator.evaluate(board, self.color), None);
        }

        let side = if maximizing {
            self.color
        } else {
            self.color.opposite()
        };
        let moves = self.generate_moves(board, side);
        if moves.is_empty() {
            // The side to move is stuck; score the position as it stands.
            return (self.evaluator.evaluate(board, self.color), None);
        }

        let mut best_move = None;
        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let token = board.apply_move(&mv);
                let (score, _) = self.minimax(board, depth - 1, alpha, beta, false);
                board.undo_move(token);

                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let token = board.apply_move(&mv);
                let (score, _) = self.minimax(board, depth - 1, alpha, beta, true);
                board.undo_move(token);

                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        }
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, game: &GameState) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        let start = Instant::now();

        let mut board = game.board.clone();
        let legal = self.generate_moves(&board, self.color);
        if legal.is_empty() {
            return None;
        }

        let (score, best_move) =
            self.minimax(&mut board, self.depth, i32::MIN, i32::MAX, true);

        let chosen = match best_move {
            Some(mv) => mv,
            // Every branch tied at the sentinel (or the root was already
            // terminal): pick uniformly at random rather than fail.
            None => legal
                .as_slice()
                .choose(&mut rand::thread_rng())
                .cloned()?,
        };

        let stats = SearchStats {
            depth: self.depth,
            nodes: self.nodes_searched,
            time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        log::debug!(
            "search done: color={:?} depth={} nodes={} score={} move={:?}->{:?} x{}",
            self.color,
            stats.depth,
            stats.nodes,
            score,
            chosen.from,
            chosen.to,
            chosen.capture_len(),
        );

        Some((chosen, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{Piece, Square};

    fn square(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    fn engine(color: Color, difficulty: Difficulty) -> AlphaBetaEngine {
        AlphaBetaEngine::new(color, difficulty, Arc::new(EngineConfig::default()))
    }

    /// Unpruned reference minimax over the same primitives.
    fn plain_minimax(
        evaluator: &MaterialEvaluator,
        generator: &MoveGenerator,
        board: &mut Board,
        depth: u8,
        engine_color: Color,
        maximizing: bool,
    ) -> i32 {
        if depth == 0 || board.winner().is_some() {
            return evaluator.evaluate(board, engine_color);
        }
        let side = if maximizing {
            engine_color
        } else {
            engine_color.opposite()
        };
        let moves = generator.all_moves(board, side);
        if moves.is_empty() {
            return evaluator.evaluate(board, engine_color);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let token = board.apply_move(&mv);
            let score = plain_minimax(
                evaluator,
                generator,
                board,
                depth - 1,
                engine_color,
                !maximizing,
            );
            board.undo_move(token);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// A start position advanced a couple of plies so captures exist.
    fn midgame() -> Board {
        let mut board = Board::new();
        for (from, to) in [((5, 2), (4, 3)), ((2, 1), (3, 2))] {
            let mv = Move {
                from: square(from.0, from.1),
                to: square(to.0, to.1),
                captured: Vec::new(),
            };
            board.apply_move(&mv);
        }
        board
    }

    #[test]
    fn pruning_does_not_change_the_score() {
        let board = midgame();
        let evaluator = MaterialEvaluator::new(Arc::new(EngineConfig::default()));
        let generator = MoveGenerator::new();

        for color in [Color::Light, Color::Dark] {
            for depth in 1..=3 {
                let mut engine = engine(color, Difficulty::Easy);
                let (pruned, _) =
                    engine.minimax(&mut board.clone(), depth, i32::MIN, i32::MAX, true);
                let full = plain_minimax(
                    &evaluator,
                    &generator,
                    &mut board.clone(),
                    depth,
                    color,
                    true,
                );
                assert_eq!(pruned, full, "color={color:?} depth={depth}");
            }
        }
    }

    #[test]
    fn search_leaves_callers_board_untouched() {
        let mut game = GameState::new();
        let before = game.board.clone();
        let mut engine = engine(Color::Dark, Difficulty::Easy);
        let result = engine.search(&game);
        assert!(result.is_some());
        assert_eq!(game.board, before);

        // The chosen move commits cleanly through the game layer.
        let (mv, _) = result.unwrap();
        assert!(game.make_move(mv.from, mv.to).is_ok());
    }

    #[test]
    fn engine_takes_the_long_jump_when_it_wins_material() {
        // Dark man at (3,3) with Light men at (2,2) and a follow-up target:
        // the double jump is clearly the best line.
        let mut board = Board::empty();
        board.add_piece(Piece {
            square: square(5, 5),
            color: Color::Dark,
            king: false,
        });
        board.add_piece(Piece {
            square: square(4, 4),
            color: Color::Light,
            king: false,
        });
        board.add_piece(Piece {
            square: square(2, 2),
            color: Color::Light,
            king: false,
        });
        let game = GameState::from_board(board, Color::Dark);

        let mut engine = engine(Color::Dark, Difficulty::Easy);
        let (mv, _) = engine.search(&game).unwrap();
        assert_eq!(mv.from, square(5, 5));
        assert_eq!(mv.to, square(1, 1));
        assert_eq!(mv.capture_len(), 2);
    }
}
