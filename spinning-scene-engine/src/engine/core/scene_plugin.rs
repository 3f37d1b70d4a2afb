use bevy::prelude::*;

use crate::engine::camera::orbit_controller::{orbit_camera_system, orbit_input_system};
use crate::engine::mesh::spinning::spin_meshes;
use crate::engine::procedural::generator::SceneRng;
use crate::engine::scene::composer::compose_scene;
use crate::engine::scene::profile::SceneProfile;
use crate::engine::systems::unmount::{UnmountScene, handle_unmount};

/// Composes the scene at start-up and drives it every frame.
///
/// Needs mesh and material asset storage plus input resources, but no
/// renderer, so it runs headless under `MinimalPlugins`. A `SceneRng`
/// inserted before the plugin is kept; otherwise OS entropy is used.
#[derive(Default)]
pub struct SpinningScenePlugin {
    pub profile: SceneProfile,
}

impl Plugin for SpinningScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.profile.clone())
            .init_resource::<SceneRng>()
            .add_event::<UnmountScene>()
            .add_systems(Startup, compose_scene)
            .add_systems(
                Update,
                (
                    spin_meshes,
                    (orbit_input_system, orbit_camera_system).chain(),
                    handle_unmount,
                ),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::engine::systems::unmount::unmount_on_escape;
            app.add_systems(Update, unmount_on_escape);
        }
    }
}
