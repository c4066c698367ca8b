//! Display forms of a board.
//!
//! Besides the plain token grid, a board can be shown as colored squares for
//! a terminal or as a run of HTML cells laid out by a 7-column CSS grid.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Cell, COLS};
use crate::codec::text::format_board;

/// How a decoded board is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    /// `O`/`B`/`R` tokens, one row per line.
    #[default]
    Text,
    /// Colored squares with row numbers on the right and column numbers below.
    Emoji,
    /// One `<div>` per cell, row-major.
    Html,
}

impl RenderStyle {
    pub const fn name(self) -> &'static str {
        match self {
            RenderStyle::Text => "text",
            RenderStyle::Emoji => "emoji",
            RenderStyle::Html => "html",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown render style '{0}' (expected text, emoji or html)")]
pub struct UnknownRenderStyle(pub String);

impl FromStr for RenderStyle {
    type Err = UnknownRenderStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(RenderStyle::Text),
            "emoji" => Ok(RenderStyle::Emoji),
            "html" => Ok(RenderStyle::Html),
            _ => Err(UnknownRenderStyle(s.to_string())),
        }
    }
}

fn emoji(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "🟫",
        Cell::PlayerB => "🟦",
        Cell::PlayerR => "🟥",
    }
}

fn html_class(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "box_white",
        Cell::PlayerB => "box_blue",
        Cell::PlayerR => "box_red",
    }
}

/// Renders a board in the given style.
pub fn render(board: &Board, style: RenderStyle) -> String {
    match style {
        RenderStyle::Text => format_board(board),
        RenderStyle::Emoji => render_emoji(board),
        RenderStyle::Html => render_html(board),
    }
}

/// Terminal view: each row is followed by its 1-based number, and a column
/// ruler closes the grid.
fn render_emoji(board: &Board) -> String {
    let mut out = String::new();
    for (r, row) in board.rows().enumerate() {
        for &cell in row {
            out.push_str(emoji(cell));
            out.push(' ');
        }
        out.push_str(&format!(" {} \n", r + 1));
    }
    out.push('\n');
    for col in 1..=COLS {
        out.push_str(&format!("{}  ", col));
    }
    out.push_str("\n\n");
    out
}

fn render_html(board: &Board) -> String {
    let mut out = String::new();
    for &cell in board.cells() {
        out.push_str(&format!(r#"<div class="{}"></div>"#, html_class(cell)));
    }
    out.push_str("<br><br>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;
    use crate::codec::packed::{decode, Encoding};

    #[test]
    fn emoji_view_of_empty_board() {
        let expected = "🟫 🟫 🟫 🟫 🟫 🟫 🟫  1 \n🟫 🟫 🟫 🟫 🟫 🟫 🟫  2 \n🟫 🟫 🟫 🟫 🟫 🟫 🟫  3 \n🟫 🟫 🟫 🟫 🟫 🟫 🟫  4 \n🟫 🟫 🟫 🟫 🟫 🟫 🟫  5 \n🟫 🟫 🟫 🟫 🟫 🟫 🟫  6 \n\n1  2  3  4  5  6  7  \n\n";
        assert_eq!(render(&Board::empty(), RenderStyle::Emoji), expected);
    }

    #[test]
    fn emoji_view_colors() {
        assert!(render(&decode(Encoding::new(1)), RenderStyle::Emoji).starts_with("🟦"));
        assert!(render(&decode(Encoding::new(2)), RenderStyle::Emoji).starts_with("🟥"));
        // reserved pattern shows as B
        assert!(render(&decode(Encoding::new(3)), RenderStyle::Emoji).starts_with("🟦"));
    }

    #[test]
    fn html_view_has_one_div_per_cell() {
        let board = Board::empty().with(0, 0, Cell::PlayerB).with(0, 1, Cell::PlayerR);
        let html = render(&board, RenderStyle::Html);
        assert!(html.starts_with(r#"<div class="box_blue"></div><div class="box_red"></div><div class="box_white"></div>"#));
        assert_eq!(html.matches("<div ").count(), CELL_COUNT);
        assert!(html.ends_with("<br><br>"));
    }

    #[test]
    fn text_view_is_plain_format() {
        let board = Board::empty().with(3, 3, Cell::PlayerR);
        assert_eq!(render(&board, RenderStyle::Text), format_board(&board));
    }

    #[test]
    fn style_names_roundtrip() {
        for style in [RenderStyle::Text, RenderStyle::Emoji, RenderStyle::Html] {
            assert_eq!(style.name().parse::<RenderStyle>(), Ok(style));
        }
        assert_eq!("HTML".parse::<RenderStyle>(), Ok(RenderStyle::Html));
        assert_eq!(
            "svg".parse::<RenderStyle>(),
            Err(UnknownRenderStyle("svg".to_string()))
        );
    }
}
