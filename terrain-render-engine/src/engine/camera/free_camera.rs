use bevy::prelude::*;
use constants::camera::{FORWARD, INITIAL_POSITION, MOUSE_SENSITIVITY, PITCH_LIMIT};

use crate::engine::input::sample::InputSample;
use crate::engine::scene::state::SceneState;

/// Marks the single viewer camera.
#[derive(Component)]
pub struct TerrainCamera;

/// What the mouse-look step asks of the window afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseLook {
    /// Look input is frozen, leave the cursor alone.
    Paused,
    /// Orientation updated, warp the cursor back to the window centre.
    Recenter,
}

/// Free camera orientation and position.
///
/// Positive yaw turns right, positive pitch looks down (screen y grows downward).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    pub position: Vec3,
    /// Homogeneous look direction, `w` is always 1.
    pub direction: Vec4,
    pub last_pointer: Vec2,
    paused: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            position: Vec3::from_array(INITIAL_POSITION),
            direction: Vec4::from_array(FORWARD),
            last_pointer: Vec2::ZERO,
            paused: false,
        }
    }
}

/// Canonical forward rotated by pitch about X, then by yaw about Y.
pub fn look_direction(yaw: f32, pitch: f32) -> Vec4 {
    Mat4::from_rotation_y(-yaw) * Mat4::from_rotation_x(-pitch) * Vec4::from_array(FORWARD)
}

impl CameraState {
    /// Turn the camera by the pointer delta since the previous tick.
    ///
    /// While paused nothing changes. The first tick after the pause is released
    /// re-anchors the baseline to the current pointer, so it never jumps.
    pub fn mouse_look(&mut self, sample: &InputSample) -> MouseLook {
        if sample.pause_held {
            self.paused = true;
            return MouseLook::Paused;
        }

        if self.paused {
            self.last_pointer = sample.pointer;
            self.paused = false;
        }

        let delta = (sample.pointer - self.last_pointer) * MOUSE_SENSITIVITY;
        self.yaw += delta.x;
        self.pitch = (self.pitch + delta.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.direction = look_direction(self.yaw, self.pitch);
        self.last_pointer = sample.pointer;

        MouseLook::Recenter
    }

    /// Step along the held movement keys, one direction-length per key.
    pub fn keyboard_move(&mut self, sample: &InputSample) {
        let forward = self.direction.truncate();
        let strafe = self.strafe_right();

        if sample.forward {
            self.position += forward;
        }
        if sample.backward {
            self.position -= forward;
        }
        if sample.strafe_left {
            self.position -= strafe;
        }
        if sample.strafe_right {
            self.position += strafe;
        }
    }

    /// Unit vector to the camera's right, in the horizontal plane.
    pub fn strafe_right(&self) -> Vec3 {
        let flat = Vec2::new(self.direction.x, self.direction.z).normalize_or_zero();
        Vec3::new(-flat.y, 0.0, flat.x)
    }

    /// Look-at view matrix with world-up +Y.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.direction.truncate(),
            Vec3::Y,
        )
    }

    /// World transform of the camera entity, the inverse of `view_matrix`.
    pub fn transform(&self) -> Transform {
        Transform::from_matrix(self.view_matrix().inverse())
    }
}

pub fn sync_camera_transform(
    scene: Res<SceneState>,
    mut camera_query: Query<&mut Transform, With<TerrainCamera>>,
) {
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = scene.camera.transform();
    }
}
