//! Bevy side of the terrain viewer.
//!
//! The mesh itself is built before the app starts; everything here configures
//! the host engine and drives camera and light state on a fixed tick.

pub mod camera;
pub mod core;
pub mod input;
pub mod lighting;
pub mod loading;
pub mod scene;
pub mod systems;
