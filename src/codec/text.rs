//! Textual board form.
//!
//! A board is written as 6 rows of 7 tokens, `O` empty, `B` and `R` for the
//! two players:
//!
//! ```text
//! O O O O O O O
//! O O O O O O O
//! O O O O O O O
//! O O O O O O O
//! O O O O O O O
//! B R O O O O O
//! ```
//!
//! Rows end at a newline or a `/`, so `OOOOOOO/.../BROOOOO` is the same board
//! on one line. Characters other than the three tokens are skipped, and rows
//! with no tokens at all are ignored. A text holding exactly 42 tokens is
//! filled 7 per row in reading order however its lines are broken, so a
//! board written on one line or wrapped at 14 tokens reads the same.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Cell, CELL_COUNT, COLS, ROWS};

/// A board text that does not hold exactly 6 rows of 7 tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedBoard {
    #[error("expected 6 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    WrongRowLength { row: usize, len: usize },
}

fn is_row_break(c: char) -> bool {
    c == '\n' || c == '/'
}

/// Parses board text into a board.
///
/// Exactly 42 tokens always make a board, row by row in reading order. Any
/// other count is reported against the text's own line structure: the wrong
/// number of token-bearing lines, or else the first line whose length is off.
/// `row` in [`MalformedBoard::WrongRowLength`] is 1-based and counts only rows
/// that hold at least one token.
pub fn parse_board(text: &str) -> Result<Board, MalformedBoard> {
    let rows: Vec<Vec<Cell>> = text
        .split(is_row_break)
        .map(|segment| segment.chars().filter_map(Cell::from_token).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    let total: usize = rows.iter().map(Vec::len).sum();
    if total == CELL_COUNT {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (slot, cell) in cells.iter_mut().zip(rows.iter().flatten()) {
            *slot = *cell;
        }
        return Ok(Board::from_cells(cells));
    }

    if rows.len() != ROWS {
        return Err(MalformedBoard::WrongRowCount(rows.len()));
    }

    // six rows but not 42 tokens: at least one row is off
    let (r, row) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != COLS)
        .ok_or(MalformedBoard::WrongRowCount(rows.len()))?;
    Err(MalformedBoard::WrongRowLength {
        row: r + 1,
        len: row.len(),
    })
}

/// Formats a board as 6 newline-terminated lines of space-separated tokens.
pub fn format_board(board: &Board) -> String {
    // 7 tokens, 6 spaces and a newline per row
    let mut out = String::with_capacity(ROWS * (COLS * 2));
    for row in board.rows() {
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                out.push(' ');
            }
            out.push(cell.token());
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_board(self))
    }
}

impl FromStr for Board {
    type Err = MalformedBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::packed::encode;

    const EMPTY_TEXT: &str = "
O O O O O O O
O O O O O O O
O O O O O O O
O O O O O O O
O O O O O O O
O O O O O O O
";

    #[test]
    fn parse_empty_board() {
        let board = parse_board(EMPTY_TEXT).expect("failed to parse empty board");
        assert!(board.is_empty());
        assert_eq!(encode(&board).raw(), 0);
    }

    #[test]
    fn parse_places_tokens_row_major() {
        let text = "B O O O O O R\nO O O O O O O\nO O O O O O O\nO O O O O O O\nO O O O O O O\nO O O O O O B\n";
        let board = parse_board(text).expect("failed to parse");
        assert_eq!(board.get(0, 0), Some(Cell::PlayerB));
        assert_eq!(board.get(0, 6), Some(Cell::PlayerR));
        assert_eq!(board.get(5, 6), Some(Cell::PlayerB));
        assert_eq!(board.count(Cell::Empty), CELL_COUNT - 3);
    }

    #[test]
    fn encodes_documented_examples() {
        let b_second_row = "OOOOOOO/BOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO";
        assert_eq!(encode(&parse_board(b_second_row).unwrap()).raw(), 16384);

        let r_last_col = "OOOOOOR/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO";
        assert_eq!(encode(&parse_board(r_last_col).unwrap()).raw(), 8192);
    }

    #[test]
    fn slash_and_newline_rows_are_equivalent() {
        let one_line = "BOOOOOO/OROOOOO/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOB";
        let multi = "B O O O O O O\nO R O O O O O\nO O O O O O O\nO O O O O O O\nO O O O O O O\nO O O O O O B";
        assert_eq!(parse_board(one_line).unwrap(), parse_board(multi).unwrap());
    }

    #[test]
    fn unrecognized_characters_are_skipped() {
        let noisy = "|B|O|O|O|O|O|O|\r\n  O.O.O.O.O.O.O \n\n\tOOOOOOO\nOOOOOOO xyz\nOOOOOOO\n1 2 OOOOOOR\n";
        let board = parse_board(noisy).expect("failed to parse noisy board");
        assert_eq!(board.get(0, 0), Some(Cell::PlayerB));
        assert_eq!(board.get(5, 6), Some(Cell::PlayerR));
        assert_eq!(board.count(Cell::Empty), CELL_COUNT - 2);
    }

    #[test]
    fn lowercase_tokens_are_not_cells() {
        let text = "bOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO";
        let err = parse_board(text).unwrap_err();
        assert_eq!(err, MalformedBoard::WrongRowLength { row: 1, len: 6 });
    }

    #[test]
    fn error_too_few_rows() {
        let err = parse_board("OOOOOOO/OOOOOOO").unwrap_err();
        assert_eq!(err, MalformedBoard::WrongRowCount(2));
    }

    #[test]
    fn error_too_many_rows() {
        let text = "OOOOOOO/".repeat(7);
        let err = parse_board(&text).unwrap_err();
        assert_eq!(err, MalformedBoard::WrongRowCount(7));
    }

    #[test]
    fn error_no_rows() {
        assert_eq!(parse_board("").unwrap_err(), MalformedBoard::WrongRowCount(0));
        assert_eq!(parse_board(" \n/ \n").unwrap_err(), MalformedBoard::WrongRowCount(0));
    }

    #[test]
    fn error_short_and_long_rows() {
        let short = "OOOOOOO/OOOOOOO/OOOOOO/OOOOOOO/OOOOOOO/OOOOOOO";
        assert_eq!(
            parse_board(short).unwrap_err(),
            MalformedBoard::WrongRowLength { row: 3, len: 6 }
        );

        let long = "OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOO/OOOOOOOO";
        assert_eq!(
            parse_board(long).unwrap_err(),
            MalformedBoard::WrongRowLength { row: 6, len: 8 }
        );
    }

    #[test]
    fn one_line_token_stream_fills_rows_in_order() {
        let mut tokens = vec!["O"; CELL_COUNT];
        tokens[0] = "B";
        let board = parse_board(&tokens.join(" ")).expect("failed to parse one-line board");
        assert_eq!(board.get(0, 0), Some(Cell::PlayerB));
        assert_eq!(encode(&board).raw(), 1);

        let compact = "O".repeat(CELL_COUNT);
        assert!(parse_board(&compact).unwrap().is_empty());
    }

    #[test]
    fn rows_wrapped_at_fourteen_tokens() {
        let mut tokens = vec!["O"; CELL_COUNT];
        tokens[7] = "R";
        let text: Vec<String> = tokens.chunks(14).map(|line| line.join(" ")).collect();
        let board = parse_board(&text.join("\n")).expect("failed to parse wrapped board");
        assert_eq!(board.get(1, 0), Some(Cell::PlayerR));
        assert_eq!(encode(&board).raw(), 32768);
    }

    #[test]
    fn uneven_rows_with_full_token_count_read_in_order() {
        let text = "OOOOOOOB\nOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO";
        let board = parse_board(text).expect("failed to parse");
        assert_eq!(board.get(1, 0), Some(Cell::PlayerB));
    }

    #[test]
    fn one_line_with_wrong_token_count_is_rejected() {
        let short = "O".repeat(CELL_COUNT - 1);
        assert_eq!(parse_board(&short).unwrap_err(), MalformedBoard::WrongRowCount(1));
    }

    #[test]
    fn format_matches_text_layout() {
        let board = Board::empty().with(5, 0, Cell::PlayerB).with(5, 1, Cell::PlayerR);
        let text = format_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "O O O O O O O");
        assert_eq!(lines[5], "B R O O O O O");
        assert!(text.ends_with('\n'));
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn format_then_parse_is_identity() {
        let board = Board::empty()
            .with(0, 3, Cell::PlayerR)
            .with(2, 2, Cell::PlayerB)
            .with(4, 6, Cell::PlayerR);
        let reparsed: Board = format_board(&board).parse().expect("failed to reparse");
        assert_eq!(reparsed, board);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            MalformedBoard::WrongRowCount(5).to_string(),
            "expected 6 rows, got 5"
        );
        assert_eq!(
            MalformedBoard::WrongRowLength { row: 2, len: 9 }.to_string(),
            "row 2 has 9 cells, expected 7"
        );
    }
}
