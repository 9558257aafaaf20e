//! Wave strings and the symbol table behind them.
//!
//! A wave string describes one signal, one character per timeslot. Each
//! timeslot is drawn as two half-bricks.
//!
//! # Wave Codes
//!
//! | Code | Meaning | Drawn as |
//! |------|---------|----------|
//! | `0` `1` | Logic low / high | Line, smooth slants |
//! | `x` | Undefined | Hatched band, never notched |
//! | `z` | High impedance | Centre line, curved entry |
//! | `u` `d` | Pulled up / down | Dotted line, curved entry |
//! | `=` `2` | Bus value | White band |
//! | `3` `4` `5` | Coloured bus value | Yellow / orange / blue band |
//! | `p` `n` | Positive / negative clock | Edge per half-brick |
//! | `l` `h` | Clock held low / high | Line, sharp entry |
//! | `P` `N` `L` `H` | As above | With arrowheads on the edge |
//! | `.` | Continue previous value | |
//! | `\|` | Continue previous value | With a broken-axis mark |
//!
//! # Example
//!
//! ```text
//! clk:  p.....
//! data: x.=.=.x
//! ```

mod signal;
mod symbols;
mod types;

pub use signal::SignalSpec;
pub use symbols::{lookup, parse_wave, Slot, WaveSymbol, CONTINUE, GAP};
pub use types::*;
