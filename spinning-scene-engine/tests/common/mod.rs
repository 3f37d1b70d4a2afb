#![allow(dead_code)]

use bevy::input::InputPlugin;
use bevy::prelude::*;
use spinning_scene_engine::engine::camera::orbit_controller::{OrbitCamera, OrbitController};
use spinning_scene_engine::engine::material::shadow_catcher::ShadowCatcherMaterial;
use spinning_scene_engine::engine::material::wobble::WobbleMaterial;
use spinning_scene_engine::engine::mesh::spinning::{RotationState, SpinningMesh};
use spinning_scene_engine::engine::procedural::generator::SceneRng;
use spinning_scene_engine::engine::scene::composer::{SceneCensus, SceneGraph};
use spinning_scene_engine::engine::scene::ground::GroundPlane;
use spinning_scene_engine::{SceneProfile, SpinningScenePlugin};

/// Scene app without window or renderer, driven by a seeded random source.
pub fn headless_app(profile: SceneProfile, seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), InputPlugin))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<WobbleMaterial>()
        .init_asset::<ShadowCatcherMaterial>()
        .insert_resource(SceneRng::seeded(seed))
        .add_plugins(SpinningScenePlugin { profile });
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn count<C: Component>(world: &mut World) -> usize {
    world.query_filtered::<(), With<C>>().iter(world).count()
}

/// Census read from the live world rather than the composer's record.
pub fn census(world: &mut World) -> SceneCensus {
    SceneCensus {
        meshes: count::<SpinningMesh>(world),
        grounds: count::<GroundPlane>(world),
        directional_lights: count::<DirectionalLight>(world),
        ambient_lights: usize::from(world.contains_resource::<AmbientLight>()),
        point_lights: count::<PointLight>(world),
        cameras: count::<Camera3d>(world),
        camera_controllers: usize::from(world.contains_resource::<OrbitController>()),
    }
}

pub fn mesh_entities(app: &App) -> Vec<Entity> {
    app.world().resource::<SceneGraph>().meshes.clone()
}

pub fn rotation(app: &App, entity: Entity) -> RotationState {
    *app.world()
        .get::<RotationState>(entity)
        .expect("mesh keeps its rotation state")
}

pub fn spin_mesh(app: &App, entity: Entity) -> SpinningMesh {
    app.world()
        .get::<SpinningMesh>(entity)
        .expect("spinning mesh")
        .clone()
}

pub fn controller(app: &App) -> OrbitController {
    app.world().resource::<OrbitController>().clone()
}

pub fn camera_transform(app: &mut App) -> Transform {
    let mut cameras = app
        .world_mut()
        .query_filtered::<&Transform, With<OrbitCamera>>();
    let transforms: Vec<Transform> = cameras.iter(app.world()).copied().collect();
    assert_eq!(transforms.len(), 1, "expected exactly one orbit camera");
    transforms[0]
}
