//! Core application setup and state management.
//!
//! Handles plugin configuration, window setup and the loading to running
//! transition.

/// Application setup and system scheduling for the Bevy engine.
///
/// Wires the fixed-tick scene update, per-frame transform sync and the
/// texture loading gate.
pub mod app_setup;

/// Application state machine from texture loading to the running viewer.
pub mod app_state;

/// Native window configuration.
pub mod window_config;
