//! Diagram documents (WaveDrom JSON or YAML).

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, WaveError};
use crate::wave::SignalSpec;

/// A parsed diagram document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// `{ "signal": [ ... ] }`
    Diagram { signal: Vec<SignalSpec> },
    /// A bare signal object
    Signal(SignalSpec),
}

impl Document {
    /// Parse a document from JSON or YAML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WaveError::file_read(path.display().to_string(), e))?;
        Self::parse(&contents)
    }

    /// The signal rows, top to bottom.
    pub fn into_signals(self) -> Vec<SignalSpec> {
        match self {
            Document::Diagram { signal } => signal,
            Document::Signal(spec) => vec![spec],
        }
    }
}
