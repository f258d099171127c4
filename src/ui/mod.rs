//! User interface module - terminal output and candidate input.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Reading candidate lists from arguments, files, or stdin

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_artifacts, display_error, display_selection_warning, display_status,
    display_success, format_version_fields,
};

/// Where candidates were read from, for messages
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Arguments,
    File(String),
    Stdin,
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Arguments => write!(f, "command-line arguments"),
            InputSource::File(path) => write!(f, "file '{}'", path),
            InputSource::Stdin => write!(f, "standard input"),
        }
    }
}

/// Gathers the candidate text.
///
/// Positional arguments win, then `--file`, then stdin. Arguments are joined
/// with newlines so the result can be split into lines or scanned as a
/// listing alike.
pub fn read_input(args: &[String], file: Option<&str>) -> Result<(String, InputSource)> {
    if !args.is_empty() {
        return Ok((args.join("\n"), InputSource::Arguments));
    }

    if let Some(path) = file {
        let text =
            fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path))?;
        return Ok((text, InputSource::File(path.to_string())));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok((text, InputSource::Stdin))
}

/// Non-blank trimmed lines of `text`
pub fn candidate_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
