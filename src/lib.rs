//! Athletics Result Normalizer Library
//!
//! A Rust library for converting heterogeneous athletics result sheets
//! (one CSV row per competitor per event) into a single structured schema
//! suitable for search indexing.
//!
//! This library provides tools for:
//! - Classifying performance marks (points, seconds, minutes, hours, meters)
//! - Decoding finishing positions including heat/phase group codes
//! - Splitting venue strings into stadium, city, country and extra context
//! - Resolving partial-precision dates and deriving competition-day age
//! - Assembling immutable, index-ready documents with per-row diagnostics
//! - Writing OpenSearch bulk files and emitting the published index mapping

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod index_sink;
        pub mod normalizer;
        pub mod row_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Mark, MarkFormat, NormalizedResult, Position, RawRow, Venue};
pub use config::Config;

/// Result type alias for the normalizer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for result-sheet normalization
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A sub-field's text does not match any recognized grammar
    #[error("Parse error in field '{field}': '{value}' - {message}")]
    FieldParse {
        field: String,
        value: String,
        message: String,
    },

    /// Unsupported date length or unknown month code
    #[error("Date format error: '{value}' - {message}")]
    DateFormat { value: String, message: String },

    /// Position phase letters absent from the lookup table
    #[error("Unknown phase code '{code}' in position '{value}'")]
    UnknownPhaseCode { code: String, value: String },

    /// Venue string with more than two commas
    #[error("Venue format error: '{value}' - {message}")]
    VenueFormat { value: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input data directory not found
    #[error("Data directory not found: {path}")]
    DataDirNotFound { path: std::path::PathBuf },

    /// Index sink failure
    #[error("Index sink error: {message}")]
    IndexSink { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a field parse error
    pub fn field_parse(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::FieldParse {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a date format error
    pub fn date_format(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DateFormat {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an unknown phase code error
    pub fn unknown_phase_code(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownPhaseCode {
            code: code.into(),
            value: value.into(),
        }
    }

    /// Create a venue format error
    pub fn venue_format(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::VenueFormat {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data directory not found error
    pub fn data_dir_not_found(path: impl Into<std::path::PathBuf>) -> Self {
        Self::DataDirNotFound { path: path.into() }
    }

    /// Create an index sink error
    pub fn index_sink(message: impl Into<String>) -> Self {
        Self::IndexSink {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::IndexSink {
            message: format!("document serialization failed: {}", error),
        }
    }
}
