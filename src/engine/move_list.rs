use crate::engine::Move;

/// Candidate moves for one side, in search order.
#[derive(Debug, Clone, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Longest capture chains first; stable, so equal-length moves keep
    /// their generation order.
    pub fn sort_by_captures(&mut self) {
        self.moves
            .sort_by(|a, b| b.capture_len().cmp(&a.capture_len()));
    }
}

impl From<Vec<Move>> for MoveList {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
