use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const PIECES_PER_SIDE: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The row a piece of this color promotes on (the opponent's back row).
    /// Light advances toward row 7, Dark toward row 0.
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Self::Light => BOARD_SIZE - 1,
            Self::Dark => 0,
        }
    }

    /// Row step for a non-king piece of this color.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Self::Light => 1,
            Self::Dark => -1,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// One diagonal step from this square, `None` when it leaves the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = usize::try_from(self.row as isize + dr).ok()?;
        let col = usize::try_from(self.col as isize + dc).ok()?;
        Self::new(row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub square: Square,
    pub color: Color,
    pub king: bool,
}

/// Everything needed to exactly reverse one `apply_move`.
#[derive(Debug, Clone)]
pub struct UndoToken {
    from: Square,
    to: Square,
    promoted: bool,
    captured: Vec<Piece>,
}

/// The position: an 8x8 grid of optional pieces plus live per-color piece
/// and king counts. The counters are touched only by the same operations
/// that add or remove a piece from the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub light_remaining: u8,
    pub dark_remaining: u8,
    pub light_kings: u8,
    pub dark_kings: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position: pieces on the playable squares of the
    /// first three rows (Light) and last three rows (Dark).
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col % 2 != (row + 1) % 2 {
                    continue;
                }
                let color = if row < 3 {
                    Color::Light
                } else if row > 4 {
                    Color::Dark
                } else {
                    continue;
                };
                if let Some(square) = Square::new(row, col) {
                    board.add_piece(Piece {
                        square,
                        color,
                        king: false,
                    });
                }
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            light_remaining: 0,
            dark_remaining: 0,
            light_kings: 0,
            dark_kings: 0,
        }
    }

    #[must_use]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.grid[square.row][square.col]
    }

    #[must_use]
    pub const fn remaining(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_remaining,
            Color::Dark => self.dark_remaining,
        }
    }

    #[must_use]
    pub const fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_kings,
            Color::Dark => self.dark_kings,
        }
    }

    /// All pieces of one color, in row-major order.
    #[must_use]
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        let mut out = Vec::with_capacity(usize::from(PIECES_PER_SIDE));
        for row in &self.grid {
            for cell in row {
                if let Some(piece) = cell {
                    if piece.color == color {
                        out.push(*piece);
                    }
                }
            }
        }
        out
    }

    /// A color wins once the opponent has no pieces left.
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        if self.light_remaining == 0 {
            Some(Color::Dark)
        } else if self.dark_remaining == 0 {
            Some(Color::Light)
        } else {
            None
        }
    }

    pub fn add_piece(&mut self, piece: Piece) {
        debug_assert!(self.grid[piece.square.row][piece.square.col].is_none());
        self.grid[piece.square.row][piece.square.col] = Some(piece);
        match piece.color {
            Color::Light => {
                self.light_remaining += 1;
                if piece.king {
                    self.light_kings += 1;
                }
            }
            Color::Dark => {
                self.dark_remaining += 1;
                if piece.king {
                    self.dark_kings += 1;
                }
            }
        }
    }

    fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.grid[square.row][square.col].take()?;
        match piece.color {
            Color::Light => {
                self.light_remaining -= 1;
                if piece.king {
                    self.light_kings -= 1;
                }
            }
            Color::Dark => {
                self.dark_remaining -= 1;
                if piece.king {
                    self.dark_kings -= 1;
                }
            }
        }
        Some(piece)
    }

    /// Relocates a piece without touching the counters. The piece's own
    /// coordinates and the grid slot are updated together.
    fn relocate(&mut self, from: Square, to: Square) {
        let mut piece = self.grid[from.row][from.col]
            .take()
            .expect("no piece at move source");
        piece.square = to;
        self.grid[to.row][to.col] = Some(piece);
    }

    /// Applies a generated move: relocation, capture removal, promotion.
    ///
    /// Precondition: `mv` was produced by the generator for this exact
    /// position. Anything else is undefined input.
    pub fn apply_move(&mut self, mv: &crate::engine::Move) -> UndoToken {
        self.relocate(mv.from, mv.to);

        for captured in &mv.captured {
            self.remove_piece(captured.square);
        }

        let mut promoted = false;
        if let Some(piece) = self.grid[mv.to.row][mv.to.col].as_mut() {
            if !piece.king && mv.to.row == piece.color.promotion_row() {
                piece.king = true;
                promoted = true;
            }
        }
        if promoted {
            if let Some(piece) = self.get_piece(mv.to) {
                match piece.color {
                    Color::Light => self.light_kings += 1,
                    Color::Dark => self.dark_kings += 1,
                }
            }
        }

        UndoToken {
            from: mv.from,
            to: mv.to,
            promoted,
            captured: mv.captured.clone(),
        }
    }

    /// Exact inverse of `apply_move`: after apply then undo the position is
    /// structurally identical, grid and all four counters.
    pub fn undo_move(&mut self, token: UndoToken) {
        if token.promoted {
            if let Some(piece) = self.grid[token.to.row][token.to.col].as_mut() {
                piece.king = false;
            }
            if let Some(piece) = self.get_piece(token.to) {
                match piece.color {
                    Color::Light => self.light_kings -= 1,
                    Color::Dark => self.dark_kings -= 1,
                }
            }
        }

        self.relocate(token.to, token.from);

        for captured in token.captured {
            self.add_piece(captured);
        }
    }
}
