use serde::{Deserialize, Serialize};

use crate::engine::Move;
use crate::logic::board::{Board, Color, Square};
use crate::logic::generator::{MoveGenerator, MoveMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NoPieceAtSource,
    NotYourTurn,
    InvalidDestination,
}

/// Result of one click in the two-step select protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    PieceSelected,
    MoveMade,
    InvalidMove,
    NothingSelected,
}

/// Turn state around a [`Board`]: whose move it is, the current selection,
/// and the finished/playing status. Moves are committed either atomically
/// through [`make_move`](Self::make_move) or via the two-step
/// select-source / select-destination protocol used by interactive callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub status: GameStatus,
    pub last_move: Option<(Square, Square)>,
    #[serde(skip)]
    selected: Option<Square>,
    #[serde(skip)]
    valid_moves: MoveMap,
    #[serde(skip)]
    generator: MoveGenerator,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game from the standard setup; Dark moves first.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Dark)
    }

    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        let status = board
            .winner()
            .map_or(GameStatus::Playing, GameStatus::Won);
        Self {
            board,
            turn,
            status,
            last_move: None,
            selected: None,
            valid_moves: MoveMap::new(),
            generator: MoveGenerator::new(),
        }
    }

    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the currently selected piece.
    #[must_use]
    pub const fn valid_moves(&self) -> &MoveMap {
        &self.valid_moves
    }

    /// Validates and commits a move for the side to move. The destination
    /// must be one the generator produces for the piece at `from`.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .get_piece(from)
            .ok_or(MoveError::NoPieceAtSource)?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn);
        }
        let captured = self
            .generator
            .valid_moves(&self.board, &piece)
            .remove(&to)
            .ok_or(MoveError::InvalidDestination)?;

        let mv = Move {
            from,
            to,
            captured,
        };
        self.board.apply_move(&mv);
        log::debug!(
            "{:?} moved {:?} -> {:?} capturing {}",
            self.turn,
            from,
            to,
            mv.capture_len()
        );

        self.selected = None;
        self.valid_moves.clear();
        self.last_move = Some((from, to));
        self.turn = self.turn.opposite();
        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
        }
        Ok(())
    }

    /// One click of the two-step protocol. With nothing selected, picks up a
    /// piece of the side to move. With a selection, tries to move there;
    /// a failed destination drops the selection and attempts a re-select.
    pub fn select(&mut self, square: Square) -> SelectOutcome {
        if self.selected.is_some() {
            if let Some(from) = self.selected {
                if self.make_move(from, square).is_ok() {
                    return SelectOutcome::MoveMade;
                }
            }
            self.selected = None;
            self.valid_moves.clear();
            return match self.select(square) {
                SelectOutcome::PieceSelected => SelectOutcome::PieceSelected,
                _ => SelectOutcome::InvalidMove,
            };
        }

        match self.board.get_piece(square) {
            Some(piece) if piece.color == self.turn => {
                self.selected = Some(square);
                self.valid_moves = self.generator.valid_moves(&self.board, &piece);
                SelectOutcome::PieceSelected
            }
            _ => SelectOutcome::NothingSelected,
        }
    }
}
