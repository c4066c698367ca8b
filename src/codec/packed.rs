//! Packed integer encoding of a board.
//!
//! Each cell takes 2 bits at offset `2 * (row * 7 + col)`:
//!
//! ```text
//! bit   0..=1   row 0, col 0
//! bit   2..=3   row 0, col 1
//! ...
//! bit  14..=15  row 1, col 0
//! ...
//! bit  82..=83  row 5, col 6
//! ```
//!
//! Codes are `00` empty, `01` B, `10` R. A full board needs 84 bits, so the
//! value is held in a `u128`. Bits 84 and up are ignored when decoding unless
//! the caller asks for strict validation.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::board::{bit_offset, Board, Cell, BITS_PER_CELL, CELL_COUNT, CODE_MASK, COLS, ENCODED_BITS};

/// Errors from reading an encoding out of text or validating its range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("not a decimal integer: '{0}'")]
    InvalidDigits(String),

    #[error("encoding must not be negative: '{0}'")]
    Negative(String),

    #[error("encoding does not fit in 128 bits: '{0}'")]
    Overflow(String),

    #[error("encoding {0} has bits set above bit 83")]
    OutOfRange(u128),
}

/// Mask covering the 84 bits a board occupies.
pub const BOARD_MASK: u128 = (1u128 << ENCODED_BITS) - 1;

/// A board packed into a single integer.
///
/// Constructed permissively by default: any `u128` is accepted and bits past
/// the board are ignored by [`decode`]. Use [`Encoding::strict`] or
/// [`Encoding::parse_strict`] to reject them instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Encoding(u128);

impl Encoding {
    /// The encoding of the empty board.
    pub const EMPTY: Encoding = Encoding(0);

    /// Wraps a raw value without range checks.
    pub const fn new(raw: u128) -> Self {
        Encoding(raw)
    }

    /// Wraps a raw value, rejecting any set bit at position 84 or above.
    pub fn strict(raw: u128) -> Result<Self, EncodingError> {
        if raw & !BOARD_MASK != 0 {
            return Err(EncodingError::OutOfRange(raw));
        }
        Ok(Encoding(raw))
    }

    /// Parses a decimal string and applies [`Encoding::strict`].
    pub fn parse_strict(s: &str) -> Result<Self, EncodingError> {
        let raw = parse_magnitude(s)?;
        Encoding::strict(raw)
    }

    /// Returns the value as given, including any bits past the board.
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Returns the value with bits past the board cleared.
    pub const fn canonical(self) -> u128 {
        self.0 & BOARD_MASK
    }

    /// True if no bit past the board is set.
    pub const fn is_canonical(self) -> bool {
        self.0 & !BOARD_MASK == 0
    }

    /// Returns the raw 2-bit code stored for 0-based `(row, col)`.
    pub fn code_at(self, row: usize, col: usize) -> Option<u8> {
        bit_offset(row, col).map(|offset| ((self.0 >> offset) & CODE_MASK) as u8)
    }

    /// Returns the decoded cell at 0-based `(row, col)`.
    pub fn cell(self, row: usize, col: usize) -> Option<Cell> {
        self.code_at(row, col).map(Cell::from_code)
    }

    /// Lists the 0-based `(row, col)` slots holding the reserved `11` code.
    ///
    /// Such slots decode as `PlayerB`; this is the way to notice them.
    pub fn reserved_cells(self) -> Vec<(usize, usize)> {
        (0..CELL_COUNT)
            .filter(|&idx| slot_code(self.0, idx) == 0b11)
            .map(|idx| (idx / COLS, idx % COLS))
            .collect()
    }
}

fn slot_code(raw: u128, idx: usize) -> u8 {
    ((raw >> (idx as u32 * BITS_PER_CELL)) & CODE_MASK) as u8
}

/// Parses an optionally signed decimal string into a `u128`.
///
/// `-0` is accepted as zero; any other negative value is an error.
fn parse_magnitude(s: &str) -> Result<u128, EncodingError> {
    let trimmed = s.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodingError::InvalidDigits(trimmed.to_string()));
    }

    let value: u128 = digits.parse().map_err(|_| {
        // Only overflow remains once the digits are known to be valid.
        if negative {
            EncodingError::Negative(trimmed.to_string())
        } else {
            EncodingError::Overflow(trimmed.to_string())
        }
    })?;

    if negative && value != 0 {
        return Err(EncodingError::Negative(trimmed.to_string()));
    }
    Ok(value)
}

impl FromStr for Encoding {
    type Err = EncodingError;

    /// Permissive parse: bits past the board are kept and later ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_magnitude(s).map(Encoding)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Encoding {
    fn from(raw: u128) -> Self {
        Encoding(raw)
    }
}

impl From<Encoding> for u128 {
    fn from(encoding: Encoding) -> Self {
        encoding.0
    }
}

/// Serialized as a decimal string; 84-bit values overflow JSON doubles.
impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Packs a board into its encoding.
///
/// The result is always below `2^84`.
pub fn encode(board: &Board) -> Encoding {
    let raw = board
        .cells()
        .iter()
        .enumerate()
        .fold(0u128, |acc, (idx, cell)| {
            acc | (u128::from(cell.code()) << (idx as u32 * BITS_PER_CELL))
        });
    Encoding(raw)
}

/// Unpacks an encoding into a board.
///
/// Reads the low 2 bits for each of the 42 cells in row-major order, shifting
/// the remaining value down as it goes. Bits past the board are never read.
/// A reserved `11` slot reads as `PlayerB` (see [`Cell::from_code`]).
pub fn decode(encoding: Encoding) -> Board {
    let mut remaining = encoding.0;
    let mut cells = [Cell::Empty; CELL_COUNT];
    for cell in cells.iter_mut() {
        *cell = Cell::from_code((remaining & CODE_MASK) as u8);
        remaining >>= BITS_PER_CELL;
    }
    Board::from_cells(cells)
}

impl From<&Board> for Encoding {
    fn from(board: &Board) -> Self {
        encode(board)
    }
}

impl From<Encoding> for Board {
    fn from(encoding: Encoding) -> Self {
        decode(encoding)
    }
}
