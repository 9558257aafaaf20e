//! Error types for the WaveTikZ compiler.
//!
//! This module provides a unified error type [`WaveError`] that covers
//! all error conditions that can occur while loading diagram documents,
//! compiling waveforms, and writing the generated TikZ.

use thiserror::Error;

/// Result type alias using [`WaveError`].
pub type Result<T> = std::result::Result<T, WaveError>;

/// Unified error type for all WaveTikZ operations.
#[derive(Error, Debug)]
pub enum WaveError {
    // ============ Signal Errors ============
    /// Character in a wave string that is not a known wave symbol
    #[error("Unknown wave symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// Negative, infinite or NaN period
    #[error("Invalid period {period}: period must be a finite number, zero or more")]
    InvalidPeriod { period: f64 },

    /// Infinite or NaN phase
    #[error("Invalid phase {phase}: phase must be a finite number")]
    InvalidPhase { phase: f64 },

    // ============ Document Errors ============
    /// The diagram document is not valid YAML/JSON or has the wrong shape
    #[error("Failed to parse diagram document: {source}")]
    DocumentParse {
        #[source]
        source: serde_yaml::Error,
    },

    // ============ I/O Errors ============
    /// Error reading a diagram document
    #[error("Failed to read diagram file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the generated TikZ to a file
    #[error("Failed to write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the generated TikZ to stdout
    #[error("Output error: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },
}

impl WaveError {
    /// Create an unknown symbol error
    pub fn unknown_symbol(symbol: char, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }

    /// Create an invalid period error
    pub fn invalid_period(period: f64) -> Self {
        Self::InvalidPeriod { period }
    }

    /// Create a file read error
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was raised by bad signal data rather than I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSymbol { .. }
                | Self::InvalidPeriod { .. }
                | Self::InvalidPhase { .. }
                | Self::DocumentParse { .. }
        )
    }
}

impl From<serde_yaml::Error> for WaveError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::DocumentParse { source }
    }
}
