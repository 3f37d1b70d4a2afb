use bevy::prelude::*;

use crate::engine::camera::orbit_controller::OrbitController;
use crate::engine::scene::composer::SceneGraph;

/// Request to tear the scene down.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UnmountScene;

/// Despawns every scene node and drops the controller. After this the spin
/// and orbit systems find nothing to mutate.
pub fn handle_unmount(
    mut events: EventReader<UnmountScene>,
    mut commands: Commands,
    graph: Option<Res<SceneGraph>>,
    live: Query<Entity>,
) {
    if events.read().count() == 0 {
        return;
    }

    let Some(graph) = graph else {
        warn!("Unmount requested but no scene is mounted");
        return;
    };

    let mut released = 0;
    for entity in graph.entities().filter(|entity| live.contains(*entity)) {
        commands.entity(entity).despawn();
        released += 1;
    }

    commands.remove_resource::<SceneGraph>();
    commands.remove_resource::<OrbitController>();
    commands.insert_resource(AmbientLight {
        brightness: 0.0,
        ..default()
    });

    info!("Scene unmounted, {released} nodes released");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn unmount_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<UnmountScene>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        events.write(UnmountScene);
    }
}
