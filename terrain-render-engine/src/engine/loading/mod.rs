//! Asset loading for the terrain texture.
//!
//! The heightmap is decoded synchronously before the app starts; only the
//! colour texture goes through the asset server and gates the running state.

/// Texture load request and load-state polling with fail-fast exit.
pub mod texture_loader;
