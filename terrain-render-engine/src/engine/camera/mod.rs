//! Free-flying camera for terrain navigation.
//!
//! Yaw/pitch mouse-look and WASD movement integrated once per fixed tick,
//! plus the perspective projection that follows the window size.

/// Camera state, its per-tick update rules and the transform sync system.
pub mod free_camera;

/// Fixed field-of-view perspective rebuilt on window resize.
pub mod projection;
