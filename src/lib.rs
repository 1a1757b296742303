mod buffer;
mod config;
mod piece;
mod source;
mod supply;

pub mod error;

pub use buffer::*;
pub use config::{Level, SupplyConfig};
pub use piece::{Piece, DEFAULT_ALPHABET};
pub use source::PieceSource;
pub use supply::{PieceSupply, Snapshot, TRIPLE};
