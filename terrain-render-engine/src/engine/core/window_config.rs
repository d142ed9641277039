use bevy::prelude::*;
use bevy::window::PresentMode;
use constants::render_settings::{WINDOW_SIZE, WINDOW_TITLE};

pub fn create_window_config() -> Window {
    Window {
        title: WINDOW_TITLE.into(),
        resolution: WINDOW_SIZE.into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
