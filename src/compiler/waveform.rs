//! Compile one signal's wave string into primitive calls.

use tracing::{debug, trace, warn};

use super::brick::{emit_brick, Half};
use super::transition::emit_transition;
use super::CompilerConfig;
use crate::error::{Result, WaveError};
use crate::render::PrimitiveCall;
use crate::wave::{parse_wave, SignalSpec, Slot, WaveSymbol, CONTINUE};

/// Transient state for one signal's render.
struct RenderState {
    /// Cursor, in brick widths from the row origin
    cursor: f64,
    /// Effective value of the previous timeslot
    previous: WaveSymbol,
    /// Cursor where the open bus span started
    bus_start: Option<f64>,
    /// Midpoints of closed bus spans, in order
    bus_anchors: Vec<f64>,
}

impl RenderState {
    fn new(cursor: f64, previous: WaveSymbol) -> Self {
        Self {
            cursor,
            previous,
            bus_start: None,
            bus_anchors: Vec::new(),
        }
    }

    fn close_bus(&mut self) {
        if let Some(start) = self.bus_start.take() {
            self.bus_anchors.push((start + self.cursor) / 2.0);
        }
    }
}

/// Compiles signal specifications into primitive calls.
#[derive(Debug, Clone, Default)]
pub struct WaveCompiler {
    config: CompilerConfig,
}

impl WaveCompiler {
    /// Create a compiler with default geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with custom geometry.
    pub fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Compile one signal.
    ///
    /// The calls assume the cursor sits at the row origin. Nothing is
    /// returned unless the whole wave compiles.
    pub fn compile(&self, spec: &SignalSpec) -> Result<Vec<PrimitiveCall>> {
        if !(spec.period >= 0.0 && spec.period.is_finite()) {
            return Err(WaveError::invalid_period(spec.period));
        }
        if !spec.phase.is_finite() {
            return Err(WaveError::InvalidPhase { phase: spec.phase });
        }

        let slots = parse_wave(&spec.wave)?;
        let width = spec.period;
        let shift = 2.0 * spec.phase.abs() * width;
        let mut calls = Vec::with_capacity(slots.len() * 2 + 4);

        let mut cursor = 0.0;
        if spec.phase < 0.0 {
            calls.push(PrimitiveCall::Shift { width: shift });
            cursor += shift;
        } else if spec.phase > 0.0 {
            let visible = (2.0 * slots.len() as f64 * width - shift).max(0.0);
            calls.push(PrimitiveCall::BeginClip { width: visible });
            calls.push(PrimitiveCall::Shift { width: -shift });
            cursor -= shift;
        }

        // A leading continuation has nothing to continue; treat it as undefined.
        let first = match slots.first() {
            Some(Slot::Value(symbol)) => *symbol,
            _ => WaveSymbol::Undefined,
        };
        let mut state = RenderState::new(cursor, first);

        let nodes = spec.node.chars().chain(std::iter::repeat(CONTINUE));
        for (t, (slot, node)) in slots.iter().zip(nodes).enumerate() {
            let current = match slot {
                Slot::Value(symbol) => *symbol,
                Slot::Continue | Slot::Gap => state.previous,
            };
            let desc = current.descriptor();

            if node != CONTINUE {
                calls.push(PrimitiveCall::NodeAnchor {
                    name: node.to_string(),
                });
            }

            if !slot.is_carry() {
                if t > 0 && current != state.previous {
                    state.close_bus();
                }
                if desc.is_labelled_bus() && state.bus_start.is_none() {
                    state.bus_start = Some(state.cursor);
                }
            }

            if t == 0 || slot.is_carry() {
                calls.push(emit_brick(desc, Half::First, width));
            } else {
                let prev = state.previous.descriptor();
                trace!(slot = t, from = prev.name, to = desc.name, "transition");
                calls.push(emit_transition(prev, desc, width, &self.config));
            }
            calls.push(emit_brick(desc, Half::Second, width));
            state.cursor += 2.0 * width;

            if *slot == Slot::Gap {
                calls.push(PrimitiveCall::Gap { back: width });
            }

            state.previous = current;
        }
        state.close_bus();

        if spec.phase > 0.0 {
            calls.push(PrimitiveCall::EndClip);
        }

        let spans = state.bus_anchors.len();
        if spec.data.len() < spans {
            warn!(
                signal = %spec.name,
                spans,
                labels = spec.data.len(),
                "fewer data labels than bus spans; extra spans are left unlabelled"
            );
        } else if spec.data.len() > spans {
            debug!(
                signal = %spec.name,
                ignored = spec.data.len() - spans,
                "ignoring excess data labels"
            );
        }

        for (index, x) in state.bus_anchors.into_iter().enumerate() {
            calls.push(PrimitiveCall::BusAnchor { index, x });
            if let Some(text) = spec.data.get(index) {
                calls.push(PrimitiveCall::BusLabel {
                    index,
                    text: text.clone(),
                });
            }
        }

        debug!(
            signal = %spec.name,
            slots = slots.len(),
            calls = calls.len(),
            "compiled signal"
        );
        Ok(calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{FillStyle, Level, LineStyle};
    use approx::assert_relative_eq;

    fn compile(spec: &SignalSpec) -> Vec<PrimitiveCall> {
        WaveCompiler::new().compile(spec).unwrap()
    }

    #[test]
    fn test_empty_wave() {
        assert!(compile(&SignalSpec::new("")).is_empty());
    }

    #[test]
    fn test_negative_period_rejected() {
        let err = WaveCompiler::new()
            .compile(&SignalSpec::new("01").with_period(-1.0))
            .unwrap_err();
        assert!(matches!(err, WaveError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_nan_period_rejected() {
        let err = WaveCompiler::new()
            .compile(&SignalSpec::new("01").with_period(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, WaveError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_infinite_period_rejected() {
        let err = WaveCompiler::new()
            .compile(&SignalSpec::new("01").with_period(f64::INFINITY))
            .unwrap_err();
        assert!(matches!(err, WaveError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_infinite_phase_rejected() {
        let err = WaveCompiler::new()
            .compile(&SignalSpec::new("01").with_phase(f64::INFINITY))
            .unwrap_err();
        assert!(matches!(err, WaveError::InvalidPhase { .. }));
    }

    #[test]
    fn test_zero_period_allowed() {
        let calls = compile(&SignalSpec::new("01").with_period(0.0));
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|c| c.advance() == 0.0));
    }

    #[test]
    fn test_unknown_symbol_emits_nothing() {
        let err = WaveCompiler::new()
            .compile(&SignalSpec::new("01k"))
            .unwrap_err();
        assert!(matches!(
            err,
            WaveError::UnknownSymbol {
                symbol: 'k',
                position: 2
            }
        ));
    }

    #[test]
    fn test_leading_continuation_is_undefined() {
        let calls = compile(&SignalSpec::new(".1"));
        assert_eq!(
            calls[0],
            PrimitiveCall::BusBrick {
                width: 1.0,
                fill: FillStyle::Undefined,
            }
        );
        assert!(matches!(calls[2], PrimitiveCall::BusClose { .. }));
    }

    #[test]
    fn test_period_scales_bricks() {
        let calls = compile(&SignalSpec::new("0").with_period(2.5));
        assert_eq!(
            calls,
            vec![
                PrimitiveCall::LineBrick {
                    width: 2.5,
                    from: Level::LOW,
                    to: Level::LOW,
                    style: LineStyle::Solid,
                    arrow: false,
                };
                2
            ]
        );
    }

    #[test]
    fn test_gap_marks_slot_middle() {
        let calls = compile(&SignalSpec::new("0|"));
        assert_eq!(calls.len(), 5);
        assert!(calls[2].is_brick());
        assert!(calls[3].is_brick());
        assert_eq!(calls[4], PrimitiveCall::Gap { back: 1.0 });
    }

    #[test]
    fn test_node_anchor_precedes_transition() {
        let calls = compile(&SignalSpec::new("01").with_node(".a"));
        assert_eq!(calls.len(), 5);
        assert_eq!(
            calls[2],
            PrimitiveCall::NodeAnchor {
                name: "a".to_string()
            }
        );
        assert!(calls[3].is_transition());
    }

    #[test]
    fn test_long_node_string_is_truncated() {
        let calls = compile(&SignalSpec::new("0").with_node(".ab"));
        assert!(!calls
            .iter()
            .any(|c| matches!(c, PrimitiveCall::NodeAnchor { .. })));
    }

    #[test]
    fn test_negative_phase_shifts_right() {
        let calls = compile(&SignalSpec::new("01").with_phase(-0.5));
        assert_eq!(calls[0], PrimitiveCall::Shift { width: 1.0 });
        assert_eq!(calls.len(), 5);
    }

    #[test]
    fn test_positive_phase_clips() {
        let calls = compile(&SignalSpec::new("01").with_phase(0.25));
        assert_eq!(calls[0], PrimitiveCall::BeginClip { width: 3.5 });
        assert_eq!(calls[1], PrimitiveCall::Shift { width: -0.5 });
        assert_eq!(calls.last(), Some(&PrimitiveCall::EndClip));
        assert_eq!(calls.len(), 7);
    }

    #[test]
    fn test_bus_anchor_midpoint() {
        let calls = compile(&SignalSpec::new("x=.x").with_data(["v"]));
        let anchors: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                PrimitiveCall::BusAnchor { index, x } => Some((*index, *x)),
                _ => None,
            })
            .collect();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].0, 0);
        assert_relative_eq!(anchors[0].1, 4.0);
        assert_eq!(
            calls.last(),
            Some(&PrimitiveCall::BusLabel {
                index: 0,
                text: "v".to_string()
            })
        );
    }

    #[test]
    fn test_bus_anchor_follows_phase_shift() {
        let calls = compile(&SignalSpec::new("=").with_phase(-1.0));
        assert_eq!(
            calls.last(),
            Some(&PrimitiveCall::BusAnchor { index: 0, x: 3.0 })
        );
    }

    #[test]
    fn test_changed_bus_value_starts_new_span() {
        let calls = compile(&SignalSpec::new("2.3=").with_data(["a", "b", "c", "d"]));
        let labels: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                PrimitiveCall::BusLabel { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_labels_leave_anchors() {
        let calls = compile(&SignalSpec::new("2x3x").with_data(["only"]));
        let anchors = calls
            .iter()
            .filter(|c| matches!(c, PrimitiveCall::BusAnchor { .. }))
            .count();
        let labels = calls
            .iter()
            .filter(|c| matches!(c, PrimitiveCall::BusLabel { .. }))
            .count();
        assert_eq!(anchors, 2);
        assert_eq!(labels, 1);
    }
}
