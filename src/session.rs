//! Session state management.
//!
//! Holds the options set over the protocol and answers `encode` and `decode`
//! requests, writing replies as plain lines or JSON objects.

use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::board::Board;
use crate::codec::{render, Encoding};
use crate::convert::{decode_text, encode_text, ConvertError};
use crate::options::{OptionError, OutputFormat, SessionOptions};

/// JSON reply to a successful conversion.
#[derive(Debug, Serialize)]
struct ConversionReply {
    encoding: Encoding,
    board: Vec<String>,
    reserved_cells: Vec<(usize, usize)>,
}

#[derive(Debug, Serialize)]
struct ErrorReply {
    error: String,
}

/// Holds the mutable state of a session between commands.
#[derive(Debug, Default)]
pub struct Session {
    pub options: SessionOptions,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Sets a session option. Errors leave the options unchanged.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        self.options.set(name, value)?;
        debug!(name, ?value, "option set");
        Ok(())
    }

    /// Handles the handshake: id, option declarations, then `hellook`.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name packfour")?;
        writeln!(out, "id version {}", env!("CARGO_PKG_VERSION"))?;
        for decl in SessionOptions::declarations() {
            writeln!(out, "{}", decl)?;
        }
        writeln!(out, "hellook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `encode <board>`; replies `encoding <n>`.
    pub fn handle_encode<W: Write>(&self, board_text: &str, out: &mut W) -> io::Result<()> {
        match encode_text(board_text) {
            Ok((encoding, board)) => match self.options.format {
                OutputFormat::Plain => writeln!(out, "encoding {}", encoding)?,
                OutputFormat::Json => self.write_json(out, &conversion_reply(encoding, &board))?,
            },
            Err(e) => self.write_error(out, &e)?,
        }
        out.flush()
    }

    /// Handles `decode <n>`; replies `board`, the rendered rows, then `end`.
    pub fn handle_decode<W: Write>(&self, value: &str, out: &mut W) -> io::Result<()> {
        let (encoding, board) = match decode_text(value, self.options.strict) {
            Ok(decoded) => decoded,
            Err(e) => {
                self.write_error(out, &e)?;
                return out.flush();
            }
        };

        let reserved = encoding.reserved_cells();
        if !reserved.is_empty() {
            warn!(%encoding, cells = ?reserved, "reserved cell code 11 decoded as B");
        }
        if !encoding.is_canonical() {
            debug!(%encoding, "bits past the board ignored");
        }

        match self.options.format {
            OutputFormat::Plain => {
                writeln!(out, "board")?;
                writeln!(out, "{}", render(&board, self.options.render).trim_end_matches('\n'))?;
                writeln!(out, "end")?;
            }
            OutputFormat::Json => self.write_json(out, &conversion_reply(encoding, &board))?,
        }
        out.flush()
    }

    fn write_error<W: Write>(&self, out: &mut W, err: &ConvertError) -> io::Result<()> {
        warn!(error = %err, "conversion failed");
        match self.options.format {
            OutputFormat::Plain => writeln!(out, "error {}", err),
            OutputFormat::Json => self.write_json(
                out,
                &ErrorReply {
                    error: err.to_string(),
                },
            ),
        }
    }

    fn write_json<W: Write, T: Serialize>(&self, out: &mut W, reply: &T) -> io::Result<()> {
        serde_json::to_writer(&mut *out, reply)?;
        writeln!(out)
    }
}

fn conversion_reply(encoding: Encoding, board: &Board) -> ConversionReply {
    ConversionReply {
        encoding,
        board: board.row_strings(),
        reserved_cells: encoding.reserved_cells(),
    }
}
