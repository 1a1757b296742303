use std::fmt;

/// Kinds dealt when no alphabet is configured.
pub const DEFAULT_ALPHABET: [char; 4] = ['I', 'O', 'T', 'L'];

/// One puzzle piece. Only a [`PieceSource`](crate::PieceSource) creates
/// these, and a piece never changes after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: char,
    id: u64,
}

impl Piece {
    #[inline]
    pub(crate) const fn new(kind: char, id: u64) -> Self {
        Self { kind, id }
    }

    #[inline]
    pub const fn kind(&self) -> char {
        self.kind
    }

    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use crate::piece::Piece;

    #[test]
    fn display_shows_kind_and_id() {
        assert_eq!(Piece::new('T', 12).to_string(), "[T 12]");
    }
}
