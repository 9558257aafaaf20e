//! Waveform compiler.
//!
//! This module turns one [`SignalSpec`] into an ordered list of
//! [`PrimitiveCall`]s.
//!
//! ## Timeslots and Bricks
//!
//! Every character of a wave string is one timeslot, drawn as two
//! half-bricks of `period` brick widths each:
//!
//! 1. The first half is either a plain brick (first slot, `.` or `|`) or a
//!    transition from the previous value, chosen by [`emit_transition`]
//! 2. The second half is always a plain brick with its levels swapped,
//!    which is what draws the falling leg of a clock
//!
//! ## Phase
//!
//! A negative phase shifts the row right by `2 * |phase| * period` brick
//! widths. A positive phase shifts it left by the same amount inside a clip
//! region, so transitions in the hidden part are still computed normally
//! and then cut off at the row origin.

mod brick;
mod transition;
mod waveform;

pub use brick::{emit_brick, Half};
pub use transition::emit_transition;
pub use waveform::WaveCompiler;

use crate::error::Result;
use crate::render::PrimitiveCall;
use crate::wave::SignalSpec;

/// Default width of a slanted edge, in brick widths.
pub const DEFAULT_TRANSITION_WIDTH: f64 = 0.3;

/// Default width of a curved edge, in brick widths.
pub const DEFAULT_SLOW_TRANSITION_WIDTH: f64 = 0.5;

/// Geometry used when choosing transition shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerConfig {
    /// Slant width of a full low-to-high swing.
    pub transition_width: f64,
    /// Width of curved (slow) edges.
    pub slow_transition_width: f64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            transition_width: DEFAULT_TRANSITION_WIDTH,
            slow_transition_width: DEFAULT_SLOW_TRANSITION_WIDTH,
        }
    }
}

impl CompilerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slant width of a full swing.
    pub fn with_transition_width(mut self, transition_width: f64) -> Self {
        self.transition_width = transition_width;
        self
    }

    /// Set the width of curved edges.
    pub fn with_slow_transition_width(mut self, slow_transition_width: f64) -> Self {
        self.slow_transition_width = slow_transition_width;
        self
    }
}

/// Compile one signal with the default configuration.
pub fn compile(spec: &SignalSpec) -> Result<Vec<PrimitiveCall>> {
    WaveCompiler::new().compile(spec)
}
