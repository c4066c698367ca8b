//! packfour -- a line-protocol front end for the board codec.
//!
//! Reads commands from stdin and writes replies to stdout. Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use packfour::protocol::{parse_command, Command};
use packfour::session::Session;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs the protocol loop until `quit` or end of input.
fn main() -> Result<()> {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "stdin read failed");
                break;
            }
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let written = match cmd {
            Command::Hello => session.handle_hello(&mut out),
            Command::IsReady => session.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                if let Err(e) = session.set_option(&name, value.as_deref()) {
                    warn!(error = %e, "setoption ignored");
                }
                Ok(())
            }
            Command::Encode { board } => session.handle_encode(&board, &mut out),
            Command::Decode { value } => session.handle_decode(&value, &mut out),
            Command::Quit => break,
        };
        written.context("failed to write reply")?;
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}
