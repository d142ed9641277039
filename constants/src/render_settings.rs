/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 80.0;

pub const NEAR_PLANE: f32 = 0.1;

pub const FAR_PLANE: f32 = 6000.0;

/// Camera, input and light update rate (one tick every 10 ms).
pub const TICK_HZ: f64 = 100.0;

pub const WINDOW_TITLE: &str = "Terrain Viewer";

pub const WINDOW_SIZE: (f32, f32) = (800.0, 600.0);

pub const FPS_FONT_SIZE: f32 = 16.0;
