//! Text-in, value-out conversions shared by the session and the batch
//! converter.

use crate::board::Board;
use crate::codec::{decode, encode, parse_board, Encoding, EncodingError, MalformedBoard};

/// A conversion that could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("malformed board: {0}")]
    Board(#[from] MalformedBoard),

    #[error("invalid encoding: {0}")]
    Encoding(#[from] EncodingError),
}

/// Parses board text and packs it, returning the parsed board alongside.
pub fn encode_text(text: &str) -> Result<(Encoding, Board), ConvertError> {
    let board = parse_board(text)?;
    Ok((encode(&board), board))
}

/// Parses a decimal encoding and unpacks it. In strict mode bits past the
/// board are an error; otherwise they are ignored.
pub fn decode_text(text: &str, strict: bool) -> Result<(Encoding, Board), ConvertError> {
    let encoding = if strict {
        Encoding::parse_strict(text)?
    } else {
        text.parse::<Encoding>()?
    };
    Ok((encoding, decode(encoding)))
}
