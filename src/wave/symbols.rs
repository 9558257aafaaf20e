//! The fixed wave symbol table.

use std::fmt;

use super::types::LineStyle::{Pulled, Solid};
use super::types::TransitionKind::{Curved, Sharp, SharpArrowed, Smooth};
use super::types::*;
use crate::error::{Result, WaveError};

/// Continuation marker: repeat the previous value.
pub const CONTINUE: char = '.';

/// Spacer marker: repeat the previous value under a broken-axis mark.
pub const GAP: char = '|';

/// One of the fixed one-character wave codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveSymbol {
    /// `0`
    Low,
    /// `1`
    High,
    /// `x`
    Undefined,
    /// `z`
    HighZ,
    /// `u`
    PullUp,
    /// `d`
    PullDown,
    /// `=`
    Data,
    /// `2`
    Bus,
    /// `3`
    BusYellow,
    /// `4`
    BusOrange,
    /// `5`
    BusBlue,
    /// `p`
    PosClock,
    /// `P`
    PosClockArrow,
    /// `n`
    NegClock,
    /// `N`
    NegClockArrow,
    /// `l`
    ClockLow,
    /// `L`
    ClockLowArrow,
    /// `h`
    ClockHigh,
    /// `H`
    ClockHighArrow,
}

const fn bit(
    name: &'static str,
    glitches: bool,
    line: LineStyle,
    start: Level,
    end: Level,
    transition: TransitionKind,
) -> WaveDescriptor {
    WaveDescriptor {
        name,
        glitches,
        kind: WaveKind::Bit(BitWave {
            line,
            start,
            end,
            transition,
        }),
    }
}

const fn bus(name: &'static str, glitches: bool, fill: FillStyle, labelled: bool) -> WaveDescriptor {
    WaveDescriptor {
        name,
        glitches,
        kind: WaveKind::Bus(BusWave { fill, labelled }),
    }
}

static LOW: WaveDescriptor = bit("low", true, Solid, Level::LOW, Level::LOW, Smooth);
static HIGH: WaveDescriptor = bit("high", true, Solid, Level::HIGH, Level::HIGH, Smooth);
static UNDEFINED: WaveDescriptor = bus("x", false, FillStyle::Undefined, false);
static HIGH_Z: WaveDescriptor = bit("z", false, Solid, Level::MID, Level::MID, Curved);
static PULL_UP: WaveDescriptor = bit("pullup", true, Pulled, Level::HIGH, Level::HIGH, Curved);
static PULL_DOWN: WaveDescriptor = bit("pulldown", true, Pulled, Level::LOW, Level::LOW, Curved);
static BUS: WaveDescriptor = bus("bus", true, FillStyle::Plain, true);
static BUS_YELLOW: WaveDescriptor = bus("busyellow", true, FillStyle::Yellow, true);
static BUS_ORANGE: WaveDescriptor = bus("busorange", true, FillStyle::Orange, true);
static BUS_BLUE: WaveDescriptor = bus("busblue", true, FillStyle::Blue, true);
static POS_CLOCK: WaveDescriptor = bit("pclk", true, Solid, Level::LOW, Level::HIGH, Sharp);
static POS_CLOCK_ARROW: WaveDescriptor =
    bit("pclkarrow", true, Solid, Level::LOW, Level::HIGH, SharpArrowed);
static NEG_CLOCK: WaveDescriptor = bit("nclk", true, Solid, Level::HIGH, Level::LOW, Sharp);
static NEG_CLOCK_ARROW: WaveDescriptor =
    bit("nclkarrow", true, Solid, Level::HIGH, Level::LOW, SharpArrowed);
static CLOCK_LOW: WaveDescriptor = bit("clklow", true, Solid, Level::LOW, Level::LOW, Sharp);
static CLOCK_LOW_ARROW: WaveDescriptor =
    bit("clklowarrow", true, Solid, Level::LOW, Level::LOW, SharpArrowed);
static CLOCK_HIGH: WaveDescriptor = bit("clkhigh", true, Solid, Level::HIGH, Level::HIGH, Sharp);
static CLOCK_HIGH_ARROW: WaveDescriptor =
    bit("clkhigharrow", true, Solid, Level::HIGH, Level::HIGH, SharpArrowed);

impl WaveSymbol {
    /// Every symbol, in table order.
    pub const ALL: [WaveSymbol; 19] = [
        WaveSymbol::Low,
        WaveSymbol::High,
        WaveSymbol::Undefined,
        WaveSymbol::HighZ,
        WaveSymbol::PullUp,
        WaveSymbol::PullDown,
        WaveSymbol::Data,
        WaveSymbol::Bus,
        WaveSymbol::BusYellow,
        WaveSymbol::BusOrange,
        WaveSymbol::BusBlue,
        WaveSymbol::PosClock,
        WaveSymbol::PosClockArrow,
        WaveSymbol::NegClock,
        WaveSymbol::NegClockArrow,
        WaveSymbol::ClockLow,
        WaveSymbol::ClockLowArrow,
        WaveSymbol::ClockHigh,
        WaveSymbol::ClockHighArrow,
    ];

    /// Parse a symbol from its wave code.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Low),
            '1' => Some(Self::High),
            'x' => Some(Self::Undefined),
            'z' => Some(Self::HighZ),
            'u' => Some(Self::PullUp),
            'd' => Some(Self::PullDown),
            '=' => Some(Self::Data),
            '2' => Some(Self::Bus),
            '3' => Some(Self::BusYellow),
            '4' => Some(Self::BusOrange),
            '5' => Some(Self::BusBlue),
            'p' => Some(Self::PosClock),
            'P' => Some(Self::PosClockArrow),
            'n' => Some(Self::NegClock),
            'N' => Some(Self::NegClockArrow),
            'l' => Some(Self::ClockLow),
            'L' => Some(Self::ClockLowArrow),
            'h' => Some(Self::ClockHigh),
            'H' => Some(Self::ClockHighArrow),
            _ => None,
        }
    }

    /// The wave code for this symbol.
    pub fn as_char(&self) -> char {
        match self {
            Self::Low => '0',
            Self::High => '1',
            Self::Undefined => 'x',
            Self::HighZ => 'z',
            Self::PullUp => 'u',
            Self::PullDown => 'd',
            Self::Data => '=',
            Self::Bus => '2',
            Self::BusYellow => '3',
            Self::BusOrange => '4',
            Self::BusBlue => '5',
            Self::PosClock => 'p',
            Self::PosClockArrow => 'P',
            Self::NegClock => 'n',
            Self::NegClockArrow => 'N',
            Self::ClockLow => 'l',
            Self::ClockLowArrow => 'L',
            Self::ClockHigh => 'h',
            Self::ClockHighArrow => 'H',
        }
    }

    /// The drawing semantics of this symbol.
    pub fn descriptor(&self) -> &'static WaveDescriptor {
        match self {
            Self::Low => &LOW,
            Self::High => &HIGH,
            Self::Undefined => &UNDEFINED,
            Self::HighZ => &HIGH_Z,
            Self::PullUp => &PULL_UP,
            Self::PullDown => &PULL_DOWN,
            Self::Data | Self::Bus => &BUS,
            Self::BusYellow => &BUS_YELLOW,
            Self::BusOrange => &BUS_ORANGE,
            Self::BusBlue => &BUS_BLUE,
            Self::PosClock => &POS_CLOCK,
            Self::PosClockArrow => &POS_CLOCK_ARROW,
            Self::NegClock => &NEG_CLOCK,
            Self::NegClockArrow => &NEG_CLOCK_ARROW,
            Self::ClockLow => &CLOCK_LOW,
            Self::ClockLowArrow => &CLOCK_LOW_ARROW,
            Self::ClockHigh => &CLOCK_HIGH,
            Self::ClockHighArrow => &CLOCK_HIGH_ARROW,
        }
    }
}

impl fmt::Display for WaveSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Look up the descriptor for a wave code.
///
/// `position` is only used for error reporting.
pub fn lookup(symbol: char, position: usize) -> Result<&'static WaveDescriptor> {
    WaveSymbol::from_char(symbol)
        .map(|s| s.descriptor())
        .ok_or_else(|| WaveError::unknown_symbol(symbol, position))
}

/// One character position of a wave string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A new value
    Value(WaveSymbol),
    /// `.`: the previous value continues
    Continue,
    /// `|`: the previous value continues behind a gap mark
    Gap,
}

impl Slot {
    /// Whether this slot carries forward the previous value.
    pub fn is_carry(&self) -> bool {
        matches!(self, Slot::Continue | Slot::Gap)
    }
}

/// Split a wave string into slots, rejecting unknown symbols.
pub fn parse_wave(wave: &str) -> Result<Vec<Slot>> {
    wave.chars()
        .enumerate()
        .map(|(position, c)| match c {
            CONTINUE => Ok(Slot::Continue),
            GAP => Ok(Slot::Gap),
            _ => WaveSymbol::from_char(c)
                .map(Slot::Value)
                .ok_or_else(|| WaveError::unknown_symbol(c, position)),
        })
        .collect()
}
