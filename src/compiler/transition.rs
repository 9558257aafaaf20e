//! Transitions between consecutive timeslots.
//!
//! The shape drawn depends first on the kind pairing of the two
//! descriptors, then on the transition kind of the incoming value:
//!
//! ```text
//!              next: Bit                 next: Bus
//! prev: Bit    bit_to_bit                bit_to_bus
//! prev: Bus    bus_to_bit                bus_to_bus
//! ```
//!
//! Both enums are closed, so every pairing is handled at compile time.

use super::brick::{emit_brick, Half};
use super::CompilerConfig;
use crate::render::{Closing, PrimitiveCall};
use crate::wave::{BitWave, BusWave, Level, TransitionKind, WaveDescriptor, WaveKind};

/// Emit the first half-brick of `next` when it follows `prev`.
///
/// Returns a plain brick when nothing visibly changes.
pub fn emit_transition(
    prev: &WaveDescriptor,
    next: &WaveDescriptor,
    width: f64,
    config: &CompilerConfig,
) -> PrimitiveCall {
    match (prev.kind, next.kind) {
        (WaveKind::Bus(from), WaveKind::Bus(to)) => bus_to_bus(prev, next, from, to, width, config),
        (WaveKind::Bit(from), WaveKind::Bit(to)) => bit_to_bit(prev, next, from, to, width, config),
        (WaveKind::Bit(from), WaveKind::Bus(to)) => bit_to_bus(from, to, width, config),
        (WaveKind::Bus(from), WaveKind::Bit(to)) => bus_to_bit(from, to, width, config),
    }
}

fn bus_to_bus(
    prev: &WaveDescriptor,
    next: &WaveDescriptor,
    from: BusWave,
    to: BusWave,
    width: f64,
    config: &CompilerConfig,
) -> PrimitiveCall {
    if prev.glitches || from.fill != to.fill {
        PrimitiveCall::BusSwap {
            width,
            from: from.fill,
            to: to.fill,
            slant: config.transition_width,
        }
    } else {
        emit_brick(next, Half::First, width)
    }
}

fn bit_to_bit(
    prev: &WaveDescriptor,
    next: &WaveDescriptor,
    from: BitWave,
    to: BitWave,
    width: f64,
    config: &CompilerConfig,
) -> PrimitiveCall {
    let exit = from.exit_level();

    if exit == to.start {
        if prev.glitches {
            return glitch(to, width, config);
        }
        return emit_brick(next, Half::First, width);
    }

    match to.transition {
        // A clock draws its own full edge, which spans whatever level came before.
        TransitionKind::Sharp | TransitionKind::SharpArrowed => PrimitiveCall::Edge {
            width,
            from: if to.is_edge() { to.start } else { exit },
            to: to.end,
            style: to.line,
            arrow: to.transition.is_arrowed(),
        },
        TransitionKind::Smooth => PrimitiveCall::Slant {
            width,
            from: exit,
            to: to.end,
            slant: config.transition_width * exit.distance(to.start),
            style: to.line,
        },
        TransitionKind::Curved => PrimitiveCall::Curve {
            width,
            from: exit,
            to: to.end,
            span: config.slow_transition_width,
            style: to.line,
        },
    }
}

/// A repeat of a glitching value at the same level.
fn glitch(to: BitWave, width: f64, config: &CompilerConfig) -> PrimitiveCall {
    if to.transition.is_sharp() {
        let from = to.end.mirror();
        PrimitiveCall::Edge {
            width,
            from,
            to: to.end,
            style: to.line,
            arrow: to.transition.is_arrowed() && from != to.end,
        }
    } else {
        PrimitiveCall::Glitch {
            width,
            level: to.end,
            span: config.transition_width,
            style: to.line,
        }
    }
}

fn bit_to_bus(from: BitWave, to: BusWave, width: f64, config: &CompilerConfig) -> PrimitiveCall {
    let exit = from.exit_level();
    PrimitiveCall::BusOpen {
        width,
        from: exit,
        to: to.fill,
        slant: opening_slant(exit, config),
    }
}

fn bus_to_bit(from: BusWave, to: BitWave, width: f64, config: &CompilerConfig) -> PrimitiveCall {
    let (closing, span) = match to.transition {
        TransitionKind::Sharp | TransitionKind::SharpArrowed => (Closing::Sharp, 0.0),
        TransitionKind::Smooth => (Closing::Smooth, opening_slant(to.end, config)),
        TransitionKind::Curved => (Closing::Curved, config.slow_transition_width),
    };
    PrimitiveCall::BusClose {
        width,
        from: from.fill,
        to: to.end,
        closing,
        span,
        style: to.line,
    }
}

/// Slant between a bus edge and a line at `level`.
///
/// The farther band edge is `0.5 + |level - centre|` wave heights away.
fn opening_slant(level: Level, config: &CompilerConfig) -> f64 {
    config.transition_width * (0.5 + level.from_centre())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{FillStyle, LineStyle, WaveSymbol};
    use approx::assert_relative_eq;

    fn transition(prev: WaveSymbol, next: WaveSymbol) -> PrimitiveCall {
        emit_transition(
            prev.descriptor(),
            next.descriptor(),
            1.0,
            &CompilerConfig::default(),
        )
    }

    #[test]
    fn test_low_to_high_is_full_slant() {
        match transition(WaveSymbol::Low, WaveSymbol::High) {
            PrimitiveCall::Slant { from, to, slant, .. } => {
                assert_eq!(from, Level::LOW);
                assert_eq!(to, Level::HIGH);
                assert_relative_eq!(slant, 0.3);
            }
            other => panic!("expected slant, got {:?}", other),
        }
    }

    #[test]
    fn test_half_swing_is_half_slant() {
        match transition(WaveSymbol::HighZ, WaveSymbol::High) {
            PrimitiveCall::Slant { slant, .. } => assert_relative_eq!(slant, 0.15),
            other => panic!("expected slant, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_level_glitches() {
        assert_eq!(
            transition(WaveSymbol::Low, WaveSymbol::Low),
            PrimitiveCall::Glitch {
                width: 1.0,
                level: Level::LOW,
                span: 0.3,
                style: LineStyle::Solid,
            }
        );
    }

    #[test]
    fn test_high_z_repeat_is_plain() {
        let call = transition(WaveSymbol::HighZ, WaveSymbol::HighZ);
        assert!(call.is_brick());
    }

    #[test]
    fn test_sharp_glitch_notches() {
        assert_eq!(
            transition(WaveSymbol::High, WaveSymbol::ClockHighArrow),
            PrimitiveCall::Edge {
                width: 1.0,
                from: Level::LOW,
                to: Level::HIGH,
                style: LineStyle::Solid,
                arrow: true,
            }
        );
    }

    #[test]
    fn test_clock_repeat_draws_edge() {
        assert_eq!(
            transition(WaveSymbol::PosClock, WaveSymbol::PosClock),
            PrimitiveCall::Edge {
                width: 1.0,
                from: Level::LOW,
                to: Level::HIGH,
                style: LineStyle::Solid,
                arrow: false,
            }
        );
    }

    #[test]
    fn test_clock_to_low_glitches() {
        assert_eq!(
            transition(WaveSymbol::PosClock, WaveSymbol::Low),
            PrimitiveCall::Glitch {
                width: 1.0,
                level: Level::LOW,
                span: 0.3,
                style: LineStyle::Solid,
            }
        );
    }

    #[test]
    fn test_sharp_level_change() {
        assert_eq!(
            transition(WaveSymbol::HighZ, WaveSymbol::ClockLowArrow),
            PrimitiveCall::Edge {
                width: 1.0,
                from: Level::MID,
                to: Level::LOW,
                style: LineStyle::Solid,
                arrow: true,
            }
        );
    }

    fn edge(from: Level, to: Level, arrow: bool) -> PrimitiveCall {
        PrimitiveCall::Edge {
            width: 1.0,
            from,
            to,
            style: LineStyle::Solid,
            arrow,
        }
    }

    #[test]
    fn test_sharp_change_into_clock_keeps_edge() {
        use crate::wave::WaveSymbol::*;
        let cases = [
            (Low, NegClockArrow, edge(Level::HIGH, Level::LOW, true)),
            (Low, NegClock, edge(Level::HIGH, Level::LOW, false)),
            (High, PosClockArrow, edge(Level::LOW, Level::HIGH, true)),
            (ClockHigh, PosClock, edge(Level::LOW, Level::HIGH, false)),
            (ClockLow, NegClock, edge(Level::HIGH, Level::LOW, false)),
            (HighZ, PosClockArrow, edge(Level::LOW, Level::HIGH, true)),
        ];
        for (prev, next, expected) in cases {
            assert_eq!(transition(prev, next), expected, "{}{}", prev, next);
        }
    }

    #[test]
    fn test_sharp_change_into_held_clock() {
        assert_eq!(
            transition(WaveSymbol::Low, WaveSymbol::ClockHighArrow),
            edge(Level::LOW, Level::HIGH, true)
        );
        assert_eq!(
            transition(WaveSymbol::High, WaveSymbol::ClockLow),
            edge(Level::HIGH, Level::LOW, false)
        );
    }

    #[test]
    fn test_curved_into_pulled() {
        assert_eq!(
            transition(WaveSymbol::Low, WaveSymbol::PullUp),
            PrimitiveCall::Curve {
                width: 1.0,
                from: Level::LOW,
                to: Level::HIGH,
                span: 0.5,
                style: LineStyle::Pulled,
            }
        );
    }

    #[test]
    fn test_bus_repeat_glitches() {
        assert_eq!(
            transition(WaveSymbol::Bus, WaveSymbol::Bus),
            PrimitiveCall::BusSwap {
                width: 1.0,
                from: FillStyle::Plain,
                to: FillStyle::Plain,
                slant: 0.3,
            }
        );
    }

    #[test]
    fn test_undefined_repeat_is_plain() {
        assert_eq!(
            transition(WaveSymbol::Undefined, WaveSymbol::Undefined),
            PrimitiveCall::BusBrick {
                width: 1.0,
                fill: FillStyle::Undefined,
            }
        );
    }

    #[test]
    fn test_undefined_to_bus_swaps() {
        assert!(matches!(
            transition(WaveSymbol::Undefined, WaveSymbol::BusBlue),
            PrimitiveCall::BusSwap {
                from: FillStyle::Undefined,
                to: FillStyle::Blue,
                ..
            }
        ));
    }

    #[test]
    fn test_bit_to_bus_opening() {
        match transition(WaveSymbol::Low, WaveSymbol::Data) {
            PrimitiveCall::BusOpen { from, to, slant, .. } => {
                assert_eq!(from, Level::LOW);
                assert_eq!(to, FillStyle::Plain);
                assert_relative_eq!(slant, 0.3);
            }
            other => panic!("expected bus opening, got {:?}", other),
        }
        match transition(WaveSymbol::HighZ, WaveSymbol::Data) {
            PrimitiveCall::BusOpen { slant, .. } => assert_relative_eq!(slant, 0.15),
            other => panic!("expected bus opening, got {:?}", other),
        }
    }

    #[test]
    fn test_bus_to_bit_closings() {
        assert_eq!(
            transition(WaveSymbol::Bus, WaveSymbol::ClockHigh),
            PrimitiveCall::BusClose {
                width: 1.0,
                from: FillStyle::Plain,
                to: Level::HIGH,
                closing: Closing::Sharp,
                span: 0.0,
                style: LineStyle::Solid,
            }
        );
        assert!(matches!(
            transition(WaveSymbol::Bus, WaveSymbol::Low),
            PrimitiveCall::BusClose {
                closing: Closing::Smooth,
                ..
            }
        ));
        assert!(matches!(
            transition(WaveSymbol::Undefined, WaveSymbol::HighZ),
            PrimitiveCall::BusClose {
                closing: Closing::Curved,
                from: FillStyle::Undefined,
                ..
            }
        ));
    }

    #[test]
    fn test_every_pairing_is_handled() {
        for prev in WaveSymbol::ALL {
            for next in WaveSymbol::ALL {
                let call = transition(prev, next);
                assert!(call.is_brick() || call.is_transition());
                assert_relative_eq!(call.advance(), 1.0);
            }
        }
    }
}
