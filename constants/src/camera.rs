/// Radians of rotation per unit of raw mouse motion.
pub const MOUSE_SENSITIVITY: f32 = 0.005;

/// Pitch stays this far away from straight up/down.
pub const PITCH_EPSILON: f32 = 0.001;

/// Maximum absolute pitch in radians.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - PITCH_EPSILON;

pub const INITIAL_POSITION: [f32; 3] = [0.0, 100.0, 70.0];

/// Canonical forward vector (homogeneous) before yaw/pitch are applied.
pub const FORWARD: [f32; 4] = [0.0, 0.0, -1.0, 1.0];
