//! Line protocol handling.
//!
//! A session reads one command per line from stdin and writes replies to
//! stdout. This module parses the commands; the session module answers them.

pub mod parser;

pub use parser::{parse_command, Command};
