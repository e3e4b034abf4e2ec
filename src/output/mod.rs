//! Output formatting for calculator results.
//!
//! This module renders descriptors and subnet sets:
//! - [`terminal`] - aligned, colored text
//! - [`csv`] - CSV rows
//! - [`json`] - JSON documents with timestamp

mod csv;
mod json;
mod terminal;

pub use csv::{descriptor_csv, subnet_set_csv};
pub use json::{descriptor_json, error_json, sample_json, subnet_set_json};
pub use terminal::{descriptor_text, format_field, sample_text, subnet_set_text};

use std::fmt;
use std::str::FromStr;

/// Output format selected on the command line or in the environment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}
