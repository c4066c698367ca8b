//! Board representation.
//!
//! Contains the cell states and the fixed 6x7 grid that the codec packs
//! into a single integer.

pub mod cell;
pub mod grid;

pub use cell::{Cell, BITS_PER_CELL, CODE_MASK};
pub use grid::{bit_offset, cell_index, Board, CELL_COUNT, COLS, ENCODED_BITS, ROWS};
