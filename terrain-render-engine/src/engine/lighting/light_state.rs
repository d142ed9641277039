use bevy::prelude::*;
use constants::light::{
    AMBIENT_BRIGHTNESS, LIGHT_DROP, LIGHT_FORWARD, LIGHT_ILLUMINANCE, LIGHT_ROTATION_STEP,
};

use crate::engine::input::sample::InputSample;
use crate::engine::scene::state::SceneState;

/// Marks the rotating directional light.
#[derive(Component)]
pub struct TerrainSun;

#[derive(Debug, Clone, PartialEq)]
pub struct LightState {
    pub yaw: f32,
    /// Homogeneous light vector, length 4 in the XZ plane.
    pub direction: Vec4,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            direction: Vec4::from_array(LIGHT_FORWARD),
        }
    }
}

/// Light forward rotated about Y, same handedness as the camera yaw.
pub fn light_direction(yaw: f32) -> Vec4 {
    Mat4::from_rotation_y(-yaw) * Vec4::from_array(LIGHT_FORWARD)
}

impl LightState {
    /// Turn by one step per held key. Unbounded, wraps through trig periodicity.
    pub fn rotate(&mut self, sample: &InputSample) {
        if sample.light_increase {
            self.yaw += LIGHT_ROTATION_STEP;
        }
        if sample.light_decrease {
            self.yaw -= LIGHT_ROTATION_STEP;
        }
        self.direction = light_direction(self.yaw);
    }

    /// Directional light position vector `(x, drop, z, 0)`.
    pub fn position_vector(&self) -> Vec4 {
        Vec4::new(self.direction.x, LIGHT_DROP, self.direction.z, 0.0)
    }

    /// Direction the light travels. It arrives from the `direction` side in
    /// the XZ plane and always points down onto the terrain.
    pub fn travel_direction(&self) -> Vec3 {
        let position = self.position_vector();
        Vec3::new(-position.x, position.y, -position.z)
    }

    pub fn transform(&self) -> Transform {
        Transform::default().looking_to(self.travel_direction(), Vec3::Y)
    }
}

pub fn create_ambient_light() -> AmbientLight {
    AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    }
}

pub fn spawn_lighting(commands: &mut Commands, light: &LightState) {
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        light.transform(),
        TerrainSun,
    ));
}

pub fn sync_light_transform(
    scene: Res<SceneState>,
    mut light_query: Query<&mut Transform, With<TerrainSun>>,
) {
    if let Ok(mut light_transform) = light_query.single_mut() {
        *light_transform = scene.light.transform();
    }
}
