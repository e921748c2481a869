/*!
 * I/O Module
 * Process import, metrics export, and text rendering of results
 */

pub mod export;
pub mod gantt;
pub mod import;
pub mod table;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub use export::{save_metrics, write_metrics_csv, write_metrics_json};
pub use gantt::render_gantt;
pub use import::{load_processes, parse_csv, parse_json};
pub use table::render_metrics_table;

/// I/O operation result
pub type IoResult<T> = Result<T, IoError>;

/// Import/export errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum IoError {
    #[error("Cannot access '{path}': {message}")]
    #[diagnostic(
        code(io::access),
        help("Check that the file exists and is readable/writable.")
    )]
    Access { path: String, message: String },

    #[error("Unsupported file format: '{0}'")]
    #[diagnostic(code(io::unsupported_format), help("Use a .csv or .json file."))]
    UnsupportedFormat(String),

    #[error("Missing required column '{0}'")]
    #[diagnostic(
        code(io::missing_column),
        help("CSV files need a header row with PID, Arrival and Burst (Priority is optional).")
    )]
    MissingColumn(String),

    #[error("Line {line}: {message}")]
    #[diagnostic(code(io::parse))]
    Parse { line: usize, message: String },

    #[error("Invalid JSON: {0}")]
    #[diagnostic(
        code(io::json),
        help("Expected an array of objects with PID, Arrival, Burst and optional Priority.")
    )]
    Json(String),
}

impl IoError {
    pub(crate) fn access(path: &Path, err: std::io::Error) -> Self {
        IoError::Access {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(err: serde_json::Error) -> Self {
        IoError::Json(err.to_string())
    }
}

/// Supported file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
