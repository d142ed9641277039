//! Shared configuration for the terrain viewer.
//!
//! Every tunable value lives here so the mesh builder and the render engine
//! agree on units. Nothing is read at runtime.

/// Asset file locations.
pub mod path;

/// Heightmap to mesh conversion.
pub mod terrain;

/// Free camera movement and look sensitivity.
pub mod camera;

/// Rotating directional light.
pub mod light;

/// Projection, tick rate and window presentation.
pub mod render_settings;
