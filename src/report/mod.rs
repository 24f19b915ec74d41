//! Report generation.
//!
//! Renders the preflight result either as human-readable tables or as a JSON
//! document, to stdout or to a file.

pub mod json;
pub mod table;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::OutputFormat;
use crate::preflight::PreflightCheck;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes the preflight result to stdout or a file.
pub struct ReportWriter {
    format: OutputFormat,
    output: Option<PathBuf>,
    no_color: bool,
}

impl ReportWriter {
    pub fn new(format: OutputFormat, output: Option<PathBuf>, no_color: bool) -> Self {
        Self {
            format,
            output,
            no_color,
        }
    }

    pub fn write(&self, preflight: &PreflightCheck) -> Result<(), ReportError> {
        // File output never carries color codes.
        let rendered = match self.format {
            OutputFormat::Table => {
                table::render(preflight, self.no_color || self.output.is_some())
            }
            OutputFormat::Json => json::Report::from_preflight(preflight).to_json()?,
        };

        match &self.output {
            Some(path) => {
                fs::write(path, rendered)?;
                log::info!("Written: {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{rendered}")?;
            }
        }

        Ok(())
    }
}
