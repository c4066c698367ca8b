//! Cell states and their 2-bit codes.
//!
//! This is the only place the packed code of a cell is produced or read, so
//! the decoder's tie-break for the reserved `11` pattern lives here.

/// Contents of one board position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    PlayerB,
    PlayerR,
}

/// Mask selecting one cell's code from the low bits of an encoding.
pub const CODE_MASK: u128 = 0b11;

/// Bits used per cell.
pub const BITS_PER_CELL: u32 = 2;

impl Cell {
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::PlayerB, Cell::PlayerR];

    /// Returns the 2-bit code: `00` empty, `01` B, `10` R.
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0b00,
            Cell::PlayerB => 0b01,
            Cell::PlayerR => 0b10,
        }
    }

    /// Reads a cell from a 2-bit code. Higher bits are ignored.
    ///
    /// Bit 0 is tested before bit 1, so the reserved pattern `11` reads as
    /// `PlayerB`. No encoder output contains `11`; treat it as a quirk of
    /// malformed input rather than a validity guarantee.
    pub const fn from_code(code: u8) -> Cell {
        if code & 0b01 != 0 {
            Cell::PlayerB
        } else if code & 0b10 != 0 {
            Cell::PlayerR
        } else {
            Cell::Empty
        }
    }

    /// Returns the single-character text token.
    pub const fn token(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::PlayerB => 'B',
            Cell::PlayerR => 'R',
        }
    }

    /// Parses a cell from its text token. Only `O`, `B` and `R` are recognized.
    pub fn from_token(c: char) -> Option<Cell> {
        match c {
            'O' => Some(Cell::Empty),
            'B' => Some(Cell::PlayerB),
            'R' => Some(Cell::PlayerR),
            _ => None,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
