//! Device sampling for the fixed tick.
//!
//! Raw mouse motion is accumulated every frame; keyboard state and the
//! accumulated pointer are then reduced to one `InputSample` per tick.

/// Per-tick input snapshot, raw pointer accumulation and key bindings.
pub mod sample;
