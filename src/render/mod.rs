//! Drawing primitives and their TikZ rendering.
//!
//! The compiler never draws anything itself. It produces an ordered list of
//! [`PrimitiveCall`]s against a fixed macro library ([`tikz::PREAMBLE`]),
//! and a LaTeX run later turns those invocations into vector output.
//!
//! The library keeps two coordinates per row: `wave start`, the row origin,
//! and `last brick`, a cursor that every brick and transition advances.
//! Order matters: a call draws wherever earlier calls left the cursor.

mod primitive;
pub mod tikz;

pub use primitive::{Closing, PrimitiveCall};
