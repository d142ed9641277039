/// World units of elevation per unit of pixel intensity (0..=255).
pub const HEIGHT_MULTIPLIER: f32 = 0.25;

/// Elevation the skirt walls drop down to.
pub const SKIRT_BASE_HEIGHT: f32 = 0.0;

/// Smallest heightmap side that still contains one cell.
pub const MIN_HEIGHTMAP_SIDE: u32 = 2;
