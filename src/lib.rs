//! # WaveTikZ
//!
//! A compiler from WaveDrom timing diagrams to TikZ drawing macros.
//!
//! This library provides:
//! - A symbol table for the WaveDrom wave alphabet
//! - A waveform compiler that turns a wave string into brick and transition calls
//! - A TikZ macro library and renderer for those calls
//! - Diagram assembly from WaveDrom JSON (or YAML) documents
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`wave`] - Wave symbols, their descriptors and signal specifications
//! - [`compiler`] - Brick and transition generation, and the waveform compiler
//! - [`render`] - Primitive calls and their TikZ rendering
//! - [`diagram`] - Documents and multi-row diagram assembly
//! - [`output`] - File and stdout output (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! wavetikz render timing.json --standalone -o timing.tex
//! wavetikz signal 'p.....' --name clk
//! ```
//!
//! ### Library
//!
//! ```
//! use wavetikz::{SignalSpec, WaveCompiler};
//!
//! let spec = SignalSpec::new("01=.x").with_name("data").with_data(["A"]);
//! let calls = WaveCompiler::new().compile(&spec).unwrap();
//! assert!(!calls.is_empty());
//! ```
//!
//! ## Rendering Method
//!
//! Each timeslot is two half-bricks wide. The waveform compiler walks the wave
//! string once, emitting for every slot:
//!
//! 1. Any node anchor named for the slot
//! 2. A transition from the previous value (or a plain brick)
//! 3. A plain brick for the second half
//!
//! The generated calls are position-independent; the TikZ macros advance a
//! shared cursor, so the compiler never tracks absolute coordinates except
//! for bus label anchors.

pub mod compiler;
pub mod diagram;
pub mod error;
pub mod render;
pub mod wave;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use compiler::{CompilerConfig, WaveCompiler};
pub use diagram::{Diagram, DiagramConfig, Document};
pub use error::{Result, WaveError};
pub use render::PrimitiveCall;
pub use wave::SignalSpec;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

/// Default timeslot period multiplier
pub const DEFAULT_PERIOD: f64 = 1.0;

/// Default phase offset, in timeslots
pub const DEFAULT_PHASE: f64 = 0.0;

pub use diagram::DEFAULT_ROW_SPACING;
