//! Core types describing what a wave symbol looks like.

/// Vertical position of a bit line, 0.0 (low) to 1.0 (high).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Level(pub f64);

impl Level {
    /// Logic low.
    pub const LOW: Level = Level(0.0);
    /// Centre line (high impedance).
    pub const MID: Level = Level(0.5);
    /// Logic high.
    pub const HIGH: Level = Level(1.0);

    /// The level reflected about the centre line.
    pub fn mirror(self) -> Level {
        Level(1.0 - self.0)
    }

    /// Absolute vertical distance to another level.
    pub fn distance(self, other: Level) -> f64 {
        (self.0 - other.0).abs()
    }

    /// Distance from the centre line.
    pub fn from_centre(self) -> f64 {
        self.distance(Level::MID)
    }
}

/// Line style for bit waves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// Plain solid line
    #[default]
    Solid,
    /// Dotted line for pulled-up/pulled-down signals
    Pulled,
}

impl LineStyle {
    /// TikZ style token for this line style.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "",
            LineStyle::Pulled => "wave pulled",
        }
    }
}

/// Fill style for bus waves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillStyle {
    /// Hatched fill for the undefined `x` state
    Undefined,
    /// Plain (white) bus
    Plain,
    Yellow,
    Orange,
    Blue,
}

impl FillStyle {
    /// TikZ style token for this fill style.
    pub fn as_str(&self) -> &'static str {
        match self {
            FillStyle::Undefined => "wave x",
            FillStyle::Plain => "wave bus",
            FillStyle::Yellow => "wave busyellow",
            FillStyle::Orange => "wave busorange",
            FillStyle::Blue => "wave busblue",
        }
    }
}

/// How a bit wave is drawn when it is entered from a different level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Vertical edge (clocks)
    Sharp,
    /// Vertical edge with an arrowhead
    SharpArrowed,
    /// Slanted edge, slant proportional to the level change
    Smooth,
    /// Slow curve (high impedance, pulled lines)
    Curved,
}

impl TransitionKind {
    /// Whether this is one of the vertical-edge kinds.
    pub fn is_sharp(&self) -> bool {
        matches!(self, TransitionKind::Sharp | TransitionKind::SharpArrowed)
    }

    /// Whether edges of this kind carry an arrowhead.
    pub fn is_arrowed(&self) -> bool {
        matches!(self, TransitionKind::SharpArrowed)
    }
}

/// A wave drawn as a single line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitWave {
    pub line: LineStyle,
    /// Level at the start of the first half-brick
    pub start: Level,
    /// Level at the end of the first half-brick
    pub end: Level,
    pub transition: TransitionKind,
}

impl BitWave {
    /// Whether the wave changes level inside a brick (clock edges).
    pub fn is_edge(&self) -> bool {
        self.start != self.end
    }

    /// Level a whole timeslot finishes at.
    ///
    /// The second half-brick swaps start and end, so this is `start`.
    pub fn exit_level(&self) -> Level {
        self.start
    }
}

/// A wave drawn as a filled band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusWave {
    pub fill: FillStyle,
    /// Whether spans of this bus carry data labels
    pub labelled: bool,
}

/// Shape class of a wave descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveKind {
    Bit(BitWave),
    Bus(BusWave),
}

/// Drawing semantics of one wave symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveDescriptor {
    /// Short human-readable name (`low`, `pclk`, `busyellow`, ...)
    pub name: &'static str,
    /// Whether a repeat of the same value is drawn as a visible notch
    pub glitches: bool,
    pub kind: WaveKind,
}

impl WaveDescriptor {
    /// Whether this descriptor draws a filled band.
    pub fn is_bus(&self) -> bool {
        matches!(self.kind, WaveKind::Bus(_))
    }

    /// Whether this descriptor opens a data-label span.
    pub fn is_labelled_bus(&self) -> bool {
        matches!(self.kind, WaveKind::Bus(BusWave { labelled: true, .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mirror() {
        assert_eq!(Level::LOW.mirror(), Level::HIGH);
        assert_eq!(Level::HIGH.mirror(), Level::LOW);
        assert_eq!(Level::MID.mirror(), Level::MID);
    }

    #[test]
    fn test_level_distance() {
        assert!((Level::LOW.distance(Level::HIGH) - 1.0).abs() < 1e-12);
        assert!((Level::MID.distance(Level::HIGH) - 0.5).abs() < 1e-12);
        assert!((Level::LOW.from_centre() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_style_tokens() {
        assert_eq!(LineStyle::Solid.as_str(), "");
        assert_eq!(LineStyle::Pulled.as_str(), "wave pulled");
        assert_eq!(FillStyle::Undefined.as_str(), "wave x");
        assert_eq!(FillStyle::Blue.as_str(), "wave busblue");
    }

    #[test]
    fn test_clock_exit_level() {
        let pclk = BitWave {
            line: LineStyle::Solid,
            start: Level::LOW,
            end: Level::HIGH,
            transition: TransitionKind::Sharp,
        };
        assert!(pclk.is_edge());
        assert_eq!(pclk.exit_level(), Level::LOW);
    }
}
