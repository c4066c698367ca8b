//! The 6x7 board grid.
//!
//! Cells are stored row-major in a fixed-size array, indexed by
//! `row * COLS + col` with 0-based coordinates. Row 0 is the first line of the
//! text form, column 0 its leftmost cell.

use super::cell::{Cell, BITS_PER_CELL};

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Total number of cells.
pub const CELL_COUNT: usize = ROWS * COLS;

/// Bits needed to pack a full board.
pub const ENCODED_BITS: u32 = CELL_COUNT as u32 * BITS_PER_CELL;

/// Returns the row-major index of a cell, or None if out of bounds.
pub const fn cell_index(row: usize, col: usize) -> Option<usize> {
    if row < ROWS && col < COLS {
        Some(row * COLS + col)
    } else {
        None
    }
}

/// Returns the bit offset of a cell's code, `14 * row + 2 * col`, or None if
/// out of bounds.
pub const fn bit_offset(row: usize, col: usize) -> Option<u32> {
    match cell_index(row, col) {
        Some(idx) => Some(idx as u32 * BITS_PER_CELL),
        None => None,
    }
}

/// A snapshot of every cell on the board.
///
/// Trivially copyable; no heap allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from row-major cells.
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Creates a board from an array of rows.
    pub fn from_rows(rows: [[Cell; COLS]; ROWS]) -> Self {
        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            board.cells[r * COLS..(r + 1) * COLS].copy_from_slice(row);
        }
        board
    }

    /// Returns the cell at 0-based `(row, col)`, or None if off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        cell_index(row, col).map(|idx| self.cells[idx])
    }

    /// Sets the cell at 0-based `(row, col)`. Returns false if off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match cell_index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Returns a copy with one cell replaced. Off-board coordinates leave the
    /// board unchanged.
    pub fn with(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.set(row, col, cell);
        self
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(COLS)
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / COLS, idx % COLS, cell))
    }

    /// Returns each row as its 7 tokens without separators, e.g. `"OBROOOO"`.
    pub fn row_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.token()).collect())
            .collect()
    }

    /// Counts the cells holding the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_row_major_layout() {
        assert_eq!(bit_offset(0, 0), Some(0));
        assert_eq!(bit_offset(0, 6), Some(12));
        assert_eq!(bit_offset(1, 0), Some(14));
        assert_eq!(bit_offset(5, 6), Some(82));
        assert_eq!(ENCODED_BITS, 84);
    }

    #[test]
    fn offsets_off_the_board_are_none() {
        assert_eq!(bit_offset(ROWS, 0), None);
        assert_eq!(bit_offset(0, COLS), None);
        assert_eq!(bit_offset(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn cell_index_bounds() {
        assert_eq!(cell_index(0, 0), Some(0));
        assert_eq!(cell_index(5, 6), Some(41));
        assert_eq!(cell_index(6, 0), None);
        assert_eq!(cell_index(0, 7), None);
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert!(board.is_empty());
        assert_eq!(board.count(Cell::Empty), CELL_COUNT);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn set_and_get() {
        let mut board = Board::empty();
        assert!(board.set(2, 3, Cell::PlayerR));
        assert_eq!(board.get(2, 3), Some(Cell::PlayerR));
        assert_eq!(board.cells()[2 * COLS + 3], Cell::PlayerR);
        assert!(!board.is_empty());
    }

    #[test]
    fn set_rejects_off_board() {
        let mut board = Board::empty();
        assert!(!board.set(6, 0, Cell::PlayerB));
        assert!(!board.set(0, 7, Cell::PlayerB));
        assert!(board.is_empty());
        assert_eq!(board.get(6, 0), None);
    }

    #[test]
    fn from_rows_matches_row_major_cells() {
        let mut rows = [[Cell::Empty; COLS]; ROWS];
        rows[1][0] = Cell::PlayerB;
        rows[5][6] = Cell::PlayerR;
        let board = Board::from_rows(rows);
        assert_eq!(board.cells()[COLS], Cell::PlayerB);
        assert_eq!(board.cells()[CELL_COUNT - 1], Cell::PlayerR);
        assert_eq!(board.rows().nth(1).unwrap()[0], Cell::PlayerB);
    }

    #[test]
    fn iter_yields_coordinates() {
        let board = Board::empty().with(4, 2, Cell::PlayerB);
        let hits: Vec<_> = board
            .iter()
            .filter(|(_, _, c)| *c == Cell::PlayerB)
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(hits, vec![(4, 2)]);
        assert_eq!(board.iter().count(), CELL_COUNT);
    }

    #[test]
    fn row_strings_use_tokens() {
        let board = Board::empty()
            .with(0, 1, Cell::PlayerB)
            .with(0, 2, Cell::PlayerR);
        let rows = board.row_strings();
        assert_eq!(rows.len(), ROWS);
        assert_eq!(rows[0], "OBROOOO");
        assert_eq!(rows[5], "OOOOOOO");
    }
}
