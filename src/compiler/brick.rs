//! Plain (non-transitioning) half-bricks.

use crate::render::PrimitiveCall;
use crate::wave::{TransitionKind, WaveDescriptor, WaveKind};

/// Which half of a timeslot a brick fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Parity 0
    First,
    /// Parity 1: start and end levels are swapped
    Second,
}

/// Emit one plain brick for `desc`.
///
/// For clocks the two halves are mirror images, and only the first half
/// carries an arrowhead.
pub fn emit_brick(desc: &WaveDescriptor, half: Half, width: f64) -> PrimitiveCall {
    match desc.kind {
        WaveKind::Bus(bus) => PrimitiveCall::BusBrick {
            width,
            fill: bus.fill,
        },
        WaveKind::Bit(bit) => {
            let (from, to) = match half {
                Half::First => (bit.start, bit.end),
                Half::Second => (bit.end, bit.start),
            };
            let arrow = bit.is_edge()
                && half == Half::First
                && bit.transition == TransitionKind::SharpArrowed;
            PrimitiveCall::LineBrick {
                width,
                from,
                to,
                style: bit.line,
                arrow,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{FillStyle, Level, LineStyle, WaveSymbol};

    #[test]
    fn test_static_halves_identical() {
        for symbol in WaveSymbol::ALL {
            let desc = symbol.descriptor();
            if let WaveKind::Bit(bit) = desc.kind {
                if !bit.is_edge() {
                    assert_eq!(
                        emit_brick(desc, Half::First, 1.0),
                        emit_brick(desc, Half::Second, 1.0),
                        "symbol {}",
                        symbol
                    );
                }
            }
        }
    }

    #[test]
    fn test_clock_halves_mirrored() {
        let desc = WaveSymbol::PosClockArrow.descriptor();
        let first = emit_brick(desc, Half::First, 1.0);
        let second = emit_brick(desc, Half::Second, 1.0);
        assert_eq!(
            first,
            PrimitiveCall::LineBrick {
                width: 1.0,
                from: Level::LOW,
                to: Level::HIGH,
                style: LineStyle::Solid,
                arrow: true,
            }
        );
        assert_eq!(
            second,
            PrimitiveCall::LineBrick {
                width: 1.0,
                from: Level::HIGH,
                to: Level::LOW,
                style: LineStyle::Solid,
                arrow: false,
            }
        );
    }

    #[test]
    fn test_plain_clock_has_no_arrow() {
        let first = emit_brick(WaveSymbol::NegClock.descriptor(), Half::First, 1.0);
        assert!(matches!(first, PrimitiveCall::LineBrick { arrow: false, .. }));
    }

    #[test]
    fn test_arrowed_static_has_no_arrow() {
        let first = emit_brick(WaveSymbol::ClockHighArrow.descriptor(), Half::First, 1.0);
        assert!(matches!(first, PrimitiveCall::LineBrick { arrow: false, .. }));
    }

    #[test]
    fn test_bus_brick() {
        let brick = emit_brick(WaveSymbol::BusOrange.descriptor(), Half::Second, 2.0);
        assert_eq!(
            brick,
            PrimitiveCall::BusBrick {
                width: 2.0,
                fill: FillStyle::Orange,
            }
        );
    }
}
