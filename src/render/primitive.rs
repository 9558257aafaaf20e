//! Drawing-primitive invocations produced by the compiler.

use crate::wave::{FillStyle, Level, LineStyle};

/// How a bus band closes into a bit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
    /// Band edges meet the line at the brick start
    Sharp,
    /// Straight slanted band edges
    Smooth,
    /// Curved band edges
    Curved,
}

/// One invocation of the drawing-primitive library.
///
/// Widths are in brick widths, vertical offsets in wave heights. Every
/// brick and transition call draws from the interpreter's cursor and then
/// advances it by `width`.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveCall {
    /// Set the origin of a signal row and move the cursor there
    WaveStart { y: f64 },
    /// Text label to the left of the row origin
    SignalLabel { text: String },
    /// Move the cursor without drawing
    Shift { width: f64 },
    /// Clip everything outside `width` brick widths right of the row origin
    BeginClip { width: f64 },
    /// End the innermost clip region
    EndClip,

    /// Filled band
    BusBrick { width: f64, fill: FillStyle },
    /// Line from `from` to `to` at the cursor, then flat at `to`
    LineBrick {
        width: f64,
        from: Level,
        to: Level,
        style: LineStyle,
        arrow: bool,
    },

    /// Vertical edge between levels
    Edge {
        width: f64,
        from: Level,
        to: Level,
        style: LineStyle,
        arrow: bool,
    },
    /// Slanted edge spanning `slant` brick widths
    Slant {
        width: f64,
        from: Level,
        to: Level,
        slant: f64,
        style: LineStyle,
    },
    /// Curved edge spanning `span` brick widths
    Curve {
        width: f64,
        from: Level,
        to: Level,
        span: f64,
        style: LineStyle,
    },
    /// Small notch to the centre line and back
    Glitch {
        width: f64,
        level: Level,
        span: f64,
        style: LineStyle,
    },
    /// Close one band and open another
    BusSwap {
        width: f64,
        from: FillStyle,
        to: FillStyle,
        slant: f64,
    },
    /// Open a band from a bit line
    BusOpen {
        width: f64,
        from: Level,
        to: FillStyle,
        slant: f64,
    },
    /// Close a band into a bit line
    BusClose {
        width: f64,
        from: FillStyle,
        to: Level,
        closing: Closing,
        span: f64,
        style: LineStyle,
    },

    /// Broken-axis mark `back` brick widths left of the cursor
    Gap { back: f64 },
    /// Named coordinate at the cursor
    NodeAnchor { name: String },
    /// Numbered coordinate `x` brick widths right of the row origin
    BusAnchor { index: usize, x: f64 },
    /// Text at a numbered bus anchor
    BusLabel { index: usize, text: String },
    /// Dashed vertical guides, one per timeslot
    Gridlines {
        slots: usize,
        rows: usize,
        row_spacing: f64,
    },
}

impl PrimitiveCall {
    /// Whether this call is a plain (non-transition) brick.
    pub fn is_brick(&self) -> bool {
        matches!(
            self,
            PrimitiveCall::BusBrick { .. } | PrimitiveCall::LineBrick { .. }
        )
    }

    /// Whether this call draws a change between two wave values.
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            PrimitiveCall::Edge { .. }
                | PrimitiveCall::Slant { .. }
                | PrimitiveCall::Curve { .. }
                | PrimitiveCall::Glitch { .. }
                | PrimitiveCall::BusSwap { .. }
                | PrimitiveCall::BusOpen { .. }
                | PrimitiveCall::BusClose { .. }
        )
    }

    /// How far this call moves the cursor.
    pub fn advance(&self) -> f64 {
        match self {
            PrimitiveCall::Shift { width }
            | PrimitiveCall::BusBrick { width, .. }
            | PrimitiveCall::LineBrick { width, .. }
            | PrimitiveCall::Edge { width, .. }
            | PrimitiveCall::Slant { width, .. }
            | PrimitiveCall::Curve { width, .. }
            | PrimitiveCall::Glitch { width, .. }
            | PrimitiveCall::BusSwap { width, .. }
            | PrimitiveCall::BusOpen { width, .. }
            | PrimitiveCall::BusClose { width, .. } => *width,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let brick = PrimitiveCall::BusBrick {
            width: 1.0,
            fill: FillStyle::Plain,
        };
        assert!(brick.is_brick());
        assert!(!brick.is_transition());

        let swap = PrimitiveCall::BusSwap {
            width: 1.0,
            from: FillStyle::Plain,
            to: FillStyle::Blue,
            slant: 0.3,
        };
        assert!(swap.is_transition());
        assert!(!swap.is_brick());

        let anchor = PrimitiveCall::NodeAnchor {
            name: "a".to_string(),
        };
        assert!(!anchor.is_brick() && !anchor.is_transition());
    }

    #[test]
    fn test_advance() {
        assert_eq!(PrimitiveCall::Shift { width: -1.5 }.advance(), -1.5);
        assert_eq!(PrimitiveCall::Gap { back: 1.0 }.advance(), 0.0);
        assert_eq!(PrimitiveCall::EndClip.advance(), 0.0);
    }
}
