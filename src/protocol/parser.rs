//! Command parser for the line protocol.
//!
//! Parses incoming text lines into structured `Command` variants that the
//! session loop dispatches on.

use tracing::warn;

/// A parsed client-to-session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Handshake; the session replies with its id and options.
    Hello,

    /// Synchronization ping; the session must reply `readyok`.
    IsReady,

    /// Set a session option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Pack a board given as text, rows separated by `/`.
    Encode { board: String },

    /// Unpack a decimal encoding.
    Decode { value: String },

    /// End the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "encode" => parse_encode(&tokens),
        "decode" => parse_decode(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`. Names and values may span
/// several words; a bare trailing `value` means no value.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    let rest = match tokens {
        [_, "name", rest @ ..] if !rest.is_empty() => rest,
        _ => {
            warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
            return None;
        }
    };

    let (name, value) = split_at_keyword(rest, "value");
    if name.is_empty() {
        warn!("malformed setoption: empty name");
        return None;
    }

    Some(Command::SetOption {
        name: name.join(" "),
        value: value.filter(|v| !v.is_empty()).map(|v| v.join(" ")),
    })
}

/// Splits `tokens` around the first occurrence of `keyword`, which is dropped.
fn split_at_keyword<'a, 'b>(
    tokens: &'a [&'b str],
    keyword: &str,
) -> (&'a [&'b str], Option<&'a [&'b str]>) {
    match tokens.iter().position(|&t| t == keyword) {
        Some(at) => (&tokens[..at], Some(&tokens[at + 1..])),
        None => (tokens, None),
    }
}

/// Parses `encode <board>`. The board may contain spaces inside a row.
fn parse_encode(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed encode: expected 'encode <row>/<row>/<row>/<row>/<row>/<row>'");
        return None;
    }
    Some(Command::Encode {
        board: tokens[1..].join(" "),
    })
}

/// Parses `decode <n>`.
fn parse_decode(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed decode: expected 'decode <n>'");
        return None;
    }
    Some(Command::Decode {
        value: tokens[1].to_string(),
    })
}
