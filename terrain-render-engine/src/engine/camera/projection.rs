use bevy::prelude::*;
use bevy::window::WindowResized;
use constants::render_settings::{FAR_PLANE, FIELD_OF_VIEW_DEGREES, NEAR_PLANE};

use super::free_camera::TerrainCamera;

/// Perspective for a viewport of the given size; only the aspect ratio varies.
pub fn perspective_for_viewport(width: f32, height: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: FIELD_OF_VIEW_DEGREES.to_radians(),
        aspect_ratio: width / height,
        near: NEAR_PLANE,
        far: FAR_PLANE,
        ..default()
    }
}

/// Rebuild the camera projection whenever the window changes size.
pub fn resize_projection(
    mut resized_events: EventReader<WindowResized>,
    mut camera_query: Query<&mut Projection, With<TerrainCamera>>,
) {
    let Some(resized) = resized_events.read().last() else {
        return;
    };

    // Minimised windows report a zero-sized viewport
    if resized.width <= 0.0 || resized.height <= 0.0 {
        return;
    }

    for mut projection in &mut camera_query {
        *projection = Projection::Perspective(perspective_for_viewport(
            resized.width,
            resized.height,
        ));
    }
    debug!(
        "Projection rebuilt for {}x{} viewport",
        resized.width, resized.height
    );
}
