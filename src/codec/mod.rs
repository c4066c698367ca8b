//! Conversions between boards, packed integers, and text.
//!
//! `packed` holds the bit layout and the encoder/decoder pair, `text` the
//! `O`/`B`/`R` grid form, and `render` the terminal and HTML views.

pub mod packed;
pub mod render;
pub mod text;

pub use packed::{decode, encode, Encoding, EncodingError, BOARD_MASK};
pub use render::{render, RenderStyle, UnknownRenderStyle};
pub use text::{format_board, parse_board, MalformedBoard};
