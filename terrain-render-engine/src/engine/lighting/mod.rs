//! Scene lighting: one rotating directional light plus white ambient fill.

/// Light yaw state, its per-tick rotation and the transform sync system.
pub mod light_state;
