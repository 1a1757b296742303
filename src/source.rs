use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::trace;

use crate::{config::check_alphabet, error::ConfigError, piece::Piece};

/// Deals fresh pieces with strictly increasing ids, picking each kind
/// uniformly from the alphabet.
#[derive(Clone, Debug)]
pub struct PieceSource<R> {
    alphabet: Vec<char>,
    next_id: u64,
    rng: R,
}

impl<R> PieceSource<R>
where
    R: Rng,
{
    pub fn new(alphabet: Vec<char>, rng: R) -> Result<Self, ConfigError> {
        check_alphabet(&alphabet)?;

        Ok(Self {
            alphabet,
            next_id: 0,
            rng,
        })
    }

    pub fn draw(&mut self) -> Piece {
        let kind = self.alphabet[self.rng.gen_range(0..self.alphabet.len())];
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;

        trace!(id = piece.id(), kind = %piece.kind(), "drew piece");
        piece
    }
}

impl<R> PieceSource<R> {
    /// Id the next drawn piece will carry, which is also the number of
    /// pieces drawn so far.
    #[inline]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    #[inline]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl PieceSource<SmallRng> {
    pub fn seeded(alphabet: Vec<char>, seed: u64) -> Result<Self, ConfigError> {
        Self::new(alphabet, SmallRng::seed_from_u64(seed))
    }
}
