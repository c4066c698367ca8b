//! Session options.
//!
//! Options are set by name over the protocol (`setoption name <id> value
//! <x>`) and held in a typed struct with defaults.

use std::fmt;
use std::str::FromStr;

use crate::codec::RenderStyle;

/// Shape of protocol replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Keyword-prefixed text lines.
    #[default]
    Plain,
    /// One JSON object per reply.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Errors from `setoption`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),

    #[error("option '{0}' needs a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },
}

/// Option names as they appear on the wire.
pub const OPTION_STRICT: &str = "Strict";
pub const OPTION_RENDER: &str = "Render";
pub const OPTION_FORMAT: &str = "Format";

/// Typed session options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Reject encodings with bits set past the board.
    pub strict: bool,
    /// How `decode` shows the board in plain replies.
    pub render: RenderStyle,
    pub format: OutputFormat,
}

impl SessionOptions {
    /// Applies one named option.
    ///
    /// `Strict` given without a value turns strict mode on, the way a
    /// check-type option is toggled.
    pub fn set(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let invalid = |v: &str| OptionError::InvalidValue {
            name: name.to_string(),
            value: v.to_string(),
        };

        match name {
            OPTION_STRICT => {
                self.strict = match value {
                    None => true,
                    Some(v) => parse_bool(v).ok_or_else(|| invalid(v))?,
                };
            }
            OPTION_RENDER => {
                let v = value.ok_or_else(|| OptionError::MissingValue(name.to_string()))?;
                self.render = v.parse().map_err(|_| invalid(v))?;
            }
            OPTION_FORMAT => {
                let v = value.ok_or_else(|| OptionError::MissingValue(name.to_string()))?;
                self.format = v.parse().map_err(|_| invalid(v))?;
            }
            other => return Err(OptionError::Unknown(other.to_string())),
        }
        Ok(())
    }

    /// Lines declaring the supported options, for the `hello` handshake.
    pub fn declarations() -> [String; 3] {
        [
            format!("option name {} type check default false", OPTION_STRICT),
            format!(
                "option name {} type combo default {} var text var emoji var html",
                OPTION_RENDER,
                RenderStyle::default()
            ),
            format!(
                "option name {} type combo default {} var plain var json",
                OPTION_FORMAT,
                OutputFormat::default()
            ),
        ]
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
