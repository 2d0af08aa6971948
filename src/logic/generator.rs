use std::collections::BTreeMap;

use crate::engine::Move;
use crate::logic::board::{Board, Color, Piece, Square};

/// Destination square mapped to the pieces jumped to reach it, in jump order.
/// Empty chain means a simple (non-capturing) move.
pub type MoveMap = BTreeMap<Square, Vec<Piece>>;

/// Discovers every legal destination for a piece: simple diagonal steps and
/// multi-jump capture chains. Capture is not mandatory here; a piece with a
/// jump available still lists its simple moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// All legal destinations reachable by `piece`, each annotated with the
    /// ordered capture chain. Every landing square along a chain is a
    /// destination in its own right.
    ///
    /// The piece must have been read out of `board`'s own occupied cells.
    #[must_use]
    pub fn valid_moves(&self, board: &Board, piece: &Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        for dr in Self::row_directions(piece) {
            for dc in [-1, 1] {
                self.scan(board, piece, piece.square, dr, dc, &[], &mut moves);
            }
        }
        moves
    }

    /// Union of `valid_moves` over every piece of one color.
    #[must_use]
    pub fn all_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let mut out = Vec::new();
        for piece in board.pieces(color) {
            for (to, captured) in self.valid_moves(board, &piece) {
                out.push(Move {
                    from: piece.square,
                    to,
                    captured,
                });
            }
        }
        out
    }

    #[must_use]
    pub fn has_legal_moves(&self, board: &Board, color: Color) -> bool {
        board
            .pieces(color)
            .iter()
            .any(|piece| !self.valid_moves(board, piece).is_empty())
    }

    /// Row directions a piece may explore from its own square: forward only
    /// for a man, both for a king.
    fn row_directions(piece: &Piece) -> Vec<isize> {
        if piece.king {
            vec![-1, 1]
        } else {
            vec![piece.color.forward()]
        }
    }

    /// Row directions a chain may continue in after landing. A man's chain
    /// keeps the row direction it started with; a king's chain may reverse.
    fn continuation_rows(piece: &Piece, started: isize) -> Vec<isize> {
        if piece.king {
            vec![-1, 1]
        } else {
            vec![started]
        }
    }

    /// One scan line: a single diagonal step, then either a simple move, a
    /// jump with recursive continuations, or a dead end. `captured` holds
    /// the chain accumulated so far; each recursive branch builds its own
    /// extended copy so sibling branches never alias.
    fn scan(
        &self,
        board: &Board,
        piece: &Piece,
        from: Square,
        dr: isize,
        dc: isize,
        captured: &[Piece],
        moves: &mut MoveMap,
    ) {
        let Some(adjacent) = from.offset(dr, dc) else {
            return;
        };

        match board.get_piece(adjacent) {
            None => {
                // A simple move exists only from the piece's own square; an
                // empty cell mid-chain without a fresh jump ends the line.
                if captured.is_empty() {
                    moves.insert(adjacent, Vec::new());
                }
            }
            Some(other) if other.color == piece.color => {}
            Some(enemy) => {
                // Jumps never revisit a piece already in the chain; during
                // generation captured pieces still sit on the board.
                if captured.iter().any(|c| c.square == enemy.square) {
                    return;
                }
                let Some(landing) = adjacent.offset(dr, dc) else {
                    return;
                };
                if board.get_piece(landing).is_some() {
                    return;
                }
                let mut chain = captured.to_vec();
                chain.push(enemy);
                moves.insert(landing, chain.clone());

                for next_dr in Self::continuation_rows(piece, dr) {
                    for next_dc in [-1, 1] {
                        self.scan(board, piece, landing, next_dr, next_dc, &chain, moves);
                    }
                }
            }
        }
    }
}
