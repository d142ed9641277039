use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::free_camera::{CameraState, MouseLook};
use crate::engine::input::sample::InputSample;
use crate::engine::lighting::light_state::LightState;

/// All mutable viewer state, advanced once per fixed tick.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct SceneState {
    pub camera: CameraState,
    pub light: LightState,
}

impl SceneState {
    /// One tick in fixed order: mouse-look, movement, light.
    pub fn tick(&mut self, sample: &InputSample) -> MouseLook {
        let look = self.camera.mouse_look(sample);
        self.camera.keyboard_move(sample);
        self.light.rotate(sample);
        look
    }
}

pub fn scene_tick(
    sample: Res<InputSample>,
    mut scene: ResMut<SceneState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let look = scene.tick(&sample);
    debug!("Light direction: {}", scene.light.direction);

    if look != MouseLook::Recenter {
        return;
    }

    if let Ok(mut window) = windows.single_mut() {
        if window.focused {
            let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
            window.set_cursor_position(Some(center));
        }
    }
}
