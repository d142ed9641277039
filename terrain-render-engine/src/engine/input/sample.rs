use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

pub const MOVE_FORWARD_KEY: KeyCode = KeyCode::KeyW;
pub const MOVE_BACKWARD_KEY: KeyCode = KeyCode::KeyS;
pub const STRAFE_LEFT_KEY: KeyCode = KeyCode::KeyA;
pub const STRAFE_RIGHT_KEY: KeyCode = KeyCode::KeyD;
/// Held to freeze mouse-look and release the cursor.
pub const PAUSE_LOOK_KEY: KeyCode = KeyCode::Space;
pub const LIGHT_INCREASE_KEY: KeyCode = KeyCode::KeyQ;
pub const LIGHT_DECREASE_KEY: KeyCode = KeyCode::KeyE;

/// Raw pointer position: the sum of all device motion since startup.
///
/// Unaffected by warping the OS cursor, so re-centring never shows up as motion.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct RawPointer {
    pub position: Vec2,
}

/// Everything the scene update reads from the devices during one tick.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    pub pointer: Vec2,
    pub pause_held: bool,
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub light_increase: bool,
    pub light_decrease: bool,
}

impl InputSample {
    pub fn from_devices(keyboard: &ButtonInput<KeyCode>, pointer: Vec2) -> Self {
        Self {
            pointer,
            pause_held: keyboard.pressed(PAUSE_LOOK_KEY),
            forward: keyboard.pressed(MOVE_FORWARD_KEY),
            backward: keyboard.pressed(MOVE_BACKWARD_KEY),
            strafe_left: keyboard.pressed(STRAFE_LEFT_KEY),
            strafe_right: keyboard.pressed(STRAFE_RIGHT_KEY),
            light_increase: keyboard.pressed(LIGHT_INCREASE_KEY),
            light_decrease: keyboard.pressed(LIGHT_DECREASE_KEY),
        }
    }
}

/// Fold this frame's raw mouse motion into the pointer position.
pub fn accumulate_pointer_motion(
    mut mouse_motion: EventReader<MouseMotion>,
    mut pointer: ResMut<RawPointer>,
) {
    let delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if delta != Vec2::ZERO {
        pointer.position += delta;
    }
}

/// Take the tick's input snapshot.
pub fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    pointer: Res<RawPointer>,
    mut sample: ResMut<InputSample>,
) {
    *sample = InputSample::from_devices(&keyboard, pointer.position);
}
