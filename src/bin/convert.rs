//! Batch conversion CLI.
//!
//! Converts many boards or encodings at once, in parallel, keeping input
//! order. Decoding reads one integer per line; encoding reads boards of six
//! row lines separated by blank lines.
//!
//! Usage:
//!   packfour-convert decode --input encodings.txt --render emoji
//!   packfour-convert encode --threads 4 < boards.txt

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use packfour::batch::{run_batch, split_items, BatchConfig, Direction};
use packfour::codec::RenderStyle;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Board text to integers
    Encode,
    /// Integers to boards
    Decode,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Render {
    Text,
    Emoji,
    Html,
}

/// Convert boards to packed integers and back, in bulk.
#[derive(Parser)]
#[command(name = "packfour-convert", version, about)]
struct Cli {
    /// Conversion direction
    #[arg(value_enum)]
    mode: Mode,

    /// Read input from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Reject encodings with bits set past the 84-bit board
    #[arg(long)]
    strict: bool,

    /// How decoded boards are shown
    #[arg(long, value_enum, default_value = "text")]
    render: Render,

    /// Worker threads (default: one per core)
    #[arg(long)]
    threads: Option<usize>,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encode => Direction::Encode,
            Mode::Decode => Direction::Decode,
        }
    }
}

impl From<Render> for RenderStyle {
    fn from(render: Render) -> Self {
        match render {
            Render::Text => RenderStyle::Text,
            Render::Emoji => RenderStyle::Emoji,
            Render::Html => RenderStyle::Html,
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let mut input = String::new();
    match path {
        Some(p) => {
            File::open(p)
                .and_then(|mut f| f.read_to_string(&mut input))
                .with_context(|| format!("reading {}", p.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut input)
                .context("reading stdin")?;
        }
    }
    Ok(input)
}

fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.threads == Some(0) {
        anyhow::bail!("--threads must be at least 1");
    }

    let config = BatchConfig {
        direction: cli.mode.into(),
        strict: cli.strict,
        render: cli.render.into(),
        threads: cli.threads,
    };

    let input = read_input(cli.input.as_ref())?;
    let items = split_items(&input, config.direction);

    let start = Instant::now();
    let results = run_batch(&items, &config).context("building thread pool")?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "converted");

    let mut out: Box<dyn Write> = match &cli.output {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("creating {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut failures = 0usize;
    for (i, (item, result)) in items.iter().zip(&results).enumerate() {
        // decoded boards span several lines; keep them apart
        if i > 0 && config.direction == Direction::Decode {
            writeln!(out)?;
        }
        match result {
            Ok(text) => writeln!(out, "{}", text)?,
            Err(e) => {
                failures += 1;
                warn!(line = item.line, error = %e, "item failed");
                writeln!(out, "error: {}", e)?;
            }
        }
    }
    out.flush().context("flushing output")?;

    if failures > 0 {
        warn!(failed = failures, total = items.len(), "some items failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
