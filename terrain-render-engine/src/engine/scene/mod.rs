//! Scene state and terrain geometry.
//!
//! `SceneState` owns every value that changes while the viewer runs; the
//! terrain mesh is uploaded once and never touched again.

/// Camera and light state advanced together on the fixed tick.
pub mod state;

/// Conversion of the prebuilt terrain mesh into a textured Bevy entity.
pub mod terrain;
