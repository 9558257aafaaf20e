//! Diagram assembly: stack compiled signals into one picture.
//!
//! The [`Diagram`] struct holds the signal rows of a document. Compiling it
//! emits optional gridlines, then for each row a row origin, a label and
//! the compiled waveform.

mod document;

pub use document::Document;

use std::path::Path;

use tracing::debug;

use crate::compiler::{CompilerConfig, WaveCompiler};
use crate::error::Result;
use crate::render::{tikz, PrimitiveCall};
use crate::wave::SignalSpec;

/// Default vertical distance between rows, in wave heights.
pub const DEFAULT_ROW_SPACING: f64 = 1.5;

/// Configuration for diagram assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    /// Vertical distance between rows, in wave heights.
    pub row_spacing: f64,
    /// Whether to draw one dashed guide per timeslot.
    pub gridlines: bool,
    /// Geometry passed to the waveform compiler.
    pub compiler: CompilerConfig,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            row_spacing: DEFAULT_ROW_SPACING,
            gridlines: true,
            compiler: CompilerConfig::default(),
        }
    }
}

impl DiagramConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row spacing.
    pub fn with_row_spacing(mut self, row_spacing: f64) -> Self {
        self.row_spacing = row_spacing;
        self
    }

    /// Enable or disable gridlines.
    pub fn with_gridlines(mut self, gridlines: bool) -> Self {
        self.gridlines = gridlines;
        self
    }

    /// Set the waveform compiler geometry.
    pub fn with_compiler(mut self, compiler: CompilerConfig) -> Self {
        self.compiler = compiler;
        self
    }
}

/// A stack of signal rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    signals: Vec<SignalSpec>,
}

impl Diagram {
    /// Create a diagram from signal rows, top to bottom.
    pub fn new(signals: Vec<SignalSpec>) -> Self {
        Self { signals }
    }

    /// Create a diagram from a parsed document.
    pub fn from_document(document: Document) -> Self {
        Self::new(document.into_signals())
    }

    /// Parse a diagram from WaveDrom JSON or YAML text.
    pub fn parse(text: &str) -> Result<Self> {
        Document::parse(text).map(Self::from_document)
    }

    /// Load a diagram from a WaveDrom JSON or YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Document::load(path).map(Self::from_document)
    }

    /// The signal rows.
    pub fn signals(&self) -> &[SignalSpec] {
        &self.signals
    }

    /// Widest row in timeslots: `max(len(wave) * period - phase)`, at least 0.
    pub fn width(&self) -> f64 {
        self.signals
            .iter()
            .map(SignalSpec::width)
            .fold(0.0, f64::max)
    }

    /// Compile every row.
    ///
    /// Fails on the first row that does not compile; no partial diagram is
    /// returned.
    pub fn compile(&self, config: &DiagramConfig) -> Result<Vec<PrimitiveCall>> {
        let compiler = WaveCompiler::with_config(config.compiler.clone());
        let mut calls = Vec::new();

        if config.gridlines && !self.signals.is_empty() {
            calls.push(PrimitiveCall::Gridlines {
                slots: self.width().ceil() as usize,
                rows: self.signals.len(),
                row_spacing: config.row_spacing,
            });
        }

        let mut y = 0.0;
        for spec in &self.signals {
            calls.push(PrimitiveCall::WaveStart { y });
            if !spec.name.is_empty() {
                calls.push(PrimitiveCall::SignalLabel {
                    text: spec.name.clone(),
                });
            }
            calls.extend(compiler.compile(spec)?);
            y -= config.row_spacing;
        }

        debug!(rows = self.signals.len(), calls = calls.len(), "assembled diagram");
        Ok(calls)
    }

    /// Compile to a `tikzpicture`, or to a complete LaTeX document.
    pub fn to_tikz(&self, config: &DiagramConfig, standalone: bool) -> Result<String> {
        let picture = tikz::picture(&self.compile(config)?);
        Ok(if standalone {
            tikz::standalone(&picture)
        } else {
            picture
        })
    }
}

impl From<SignalSpec> for Diagram {
    /// A one-row diagram.
    fn from(spec: SignalSpec) -> Self {
        Self::new(vec![spec])
    }
}
