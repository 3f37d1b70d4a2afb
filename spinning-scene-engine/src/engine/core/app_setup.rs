use bevy::log::{Level, LogPlugin};
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use constants::render_settings::{LOG_FILTER, SHADOW_MAP_SIZE};

use super::scene_plugin::SpinningScenePlugin;
use super::window_config::create_window_config;
use crate::engine::material::shadow_catcher::ShadowCatcherMaterial;
use crate::engine::material::wobble::WobbleMaterial;
use crate::engine::scene::profile::SceneProfile;

/// Windowed app rendering `profile` into the canvas behind `canvas_selector`.
pub fn create_app(profile: SceneProfile, canvas_selector: &str) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(canvas_selector))
        .add_plugins(MaterialPlugin::<WobbleMaterial>::default())
        .add_plugins(MaterialPlugin::<ShadowCatcherMaterial>::default())
        .insert_resource(DirectionalLightShadowMap {
            size: SHADOW_MAP_SIZE,
        })
        .add_plugins(SpinningScenePlugin { profile });

    // FPS overlay only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        use crate::engine::systems::fps_tracking::{create_fps_overlay, fps_text_update_system};
        use bevy::diagnostic::FrameTimeDiagnosticsPlugin;

        app.add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(Startup, create_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins(canvas_selector: &str) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(canvas_selector)),
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        level: Level::INFO,
        ..default()
    };

    DefaultPlugins.set(window_config).set(log_config)
}
