//! packfour library.
//!
//! Packs a 6x7 two-player board into a single integer, 2 bits per cell, and
//! unpacks it again. Exposes the board types, the codec, and the session and
//! batch layers used by the `packfour` and `packfour-convert` binaries.

pub mod batch;
pub mod board;
pub mod codec;
pub mod convert;
pub mod options;
pub mod protocol;
pub mod session;

pub use board::{Board, Cell};
pub use codec::{decode, encode, Encoding};
