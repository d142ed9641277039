/// Radians the light turns per tick while a rotate key is held.
pub const LIGHT_ROTATION_STEP: f32 = 0.07;

/// Unrotated light vector (homogeneous); its length sets the radius.
pub const LIGHT_FORWARD: [f32; 4] = [0.0, 0.0, -4.0, 1.0];

/// Vertical component of the directional light's travel vector.
pub const LIGHT_DROP: f32 = -10.0;

/// Illuminance of the rotating directional light, in lux.
pub const LIGHT_ILLUMINANCE: f32 = 8_000.0;

/// Brightness of the white ambient light.
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
