use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_FONT_SIZE;

use crate::engine::core::app_state::FpsText;

pub fn spawn_fps_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: FPS_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

pub fn format_fps(fps: f64) -> String {
    format!("FPS: {fps:.1}")
}

// Overlay keeps its last reading until the diagnostic has a smoothed value
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut overlay: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|diagnostic| diagnostic.smoothed())
    else {
        return;
    };

    for mut text in &mut overlay {
        text.0 = format_fps(fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_decimal() {
        assert_eq!(format_fps(59.96), "FPS: 60.0");
        assert_eq!(format_fps(143.04), "FPS: 143.0");
    }

    #[test]
    fn overlay_keeps_placeholder_without_diagnostics() {
        let mut app = App::new();
        app.init_resource::<DiagnosticsStore>()
            .add_systems(Update, fps_text_update_system);
        let overlay = app.world_mut().spawn((Text::new("FPS: "), FpsText)).id();

        app.update();

        let text = app.world().get::<Text>(overlay).unwrap();
        assert_eq!(text.0, "FPS: ");
    }
}
