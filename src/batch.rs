//! Batch conversion.
//!
//! Splits an input text into items, converts them independently, and returns
//! the results in input order. When `threads` is set, items are converted on
//! a dedicated rayon pool of that size; otherwise on rayon's global pool.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::codec::{render, RenderStyle};
use crate::convert::{decode_text, encode_text, ConvertError};

/// Which way a batch converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Board text in, integers out.
    Encode,
    /// Integers in, rendered boards out.
    Decode,
}

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub direction: Direction,
    pub strict: bool,
    pub render: RenderStyle,
    /// Worker threads; `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Decode,
            strict: false,
            render: RenderStyle::Text,
            threads: None,
        }
    }
}

/// One input item and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub line: usize,
    pub text: String,
}

/// Splits input into items.
///
/// For decoding, every non-blank line is an item. For encoding, a board is a
/// run of consecutive non-blank lines; blank lines separate boards.
pub fn split_items(input: &str, direction: Direction) -> Vec<BatchItem> {
    let lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));
    match direction {
        Direction::Decode => lines
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(line, l)| BatchItem {
                line,
                text: l.trim().to_string(),
            })
            .collect(),
        Direction::Encode => {
            let mut items = Vec::new();
            let mut current: Option<BatchItem> = None;
            for (line, l) in lines {
                if l.trim().is_empty() {
                    items.extend(current.take());
                    continue;
                }
                let item = current.get_or_insert_with(|| BatchItem {
                    line,
                    text: String::new(),
                });
                if !item.text.is_empty() {
                    item.text.push('\n');
                }
                item.text.push_str(l);
            }
            items.extend(current);
            items
        }
    }
}

/// Converts one item. Decoded boards come back rendered, without a trailing
/// newline.
pub fn convert_item(item: &BatchItem, config: &BatchConfig) -> Result<String, ConvertError> {
    match config.direction {
        Direction::Encode => encode_text(&item.text).map(|(encoding, _)| encoding.to_string()),
        Direction::Decode => {
            let (_, board) = decode_text(&item.text, config.strict)?;
            Ok(render(&board, config.render).trim_end_matches('\n').to_string())
        }
    }
}

/// Converts all items, preserving order.
pub fn run_batch(
    items: &[BatchItem],
    config: &BatchConfig,
) -> Result<Vec<Result<String, ConvertError>>, rayon::ThreadPoolBuildError> {
    let failed = AtomicUsize::new(0);
    let convert_all = || {
        items
            .par_iter()
            .map(|item| {
                let result = convert_item(item, config);
                if let Err(e) = &result {
                    failed.fetch_add(1, Ordering::Relaxed);
                    debug!(line = item.line, error = %e, "item failed");
                }
                result
            })
            .collect::<Vec<_>>()
    };

    let results = match config.threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()?
            .install(convert_all),
        None => convert_all(),
    };

    info!(
        items = items.len(),
        failed = failed.load(Ordering::Relaxed),
        direction = ?config.direction,
        "batch finished"
    );
    Ok(results)
}
