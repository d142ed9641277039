//! Runtime support systems.

/// On-screen frame rate overlay.
pub mod fps_tracking;
