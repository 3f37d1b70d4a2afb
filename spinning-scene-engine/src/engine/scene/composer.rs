use bevy::pbr::ShadowFilteringMethod;
use bevy::prelude::*;
use constants::camera::{CAMERA_FOV_DEGREES, CAMERA_POSITION, ORBIT_TARGET};
use constants::render_settings::SOFT_SHADOWS;

use super::ground::spawn_ground;
use super::lighting::{insert_ambient_light, spawn_directional_light, spawn_point_lights};
use super::profile::SceneProfile;
use crate::engine::camera::orbit_controller::{OrbitCamera, OrbitController};
use crate::engine::material::attach_material;
use crate::engine::material::shadow_catcher::ShadowCatcherMaterial;
use crate::engine::material::wobble::WobbleMaterial;
use crate::engine::mesh::spec::MeshSpec;
use crate::engine::mesh::spinning::{RotationState, SpinningMesh};
use crate::engine::procedural::generator::{SceneRng, generate_mesh_spec};

/// Entities spawned by [`compose_scene`]. Never changes after mount.
#[derive(Resource, Debug, Clone)]
pub struct SceneGraph {
    pub camera: Entity,
    pub directional_light: Entity,
    pub point_lights: [Entity; 2],
    pub ground: Entity,
    pub meshes: Vec<Entity>,
}

/// Node counts per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCensus {
    pub meshes: usize,
    pub grounds: usize,
    pub directional_lights: usize,
    pub ambient_lights: usize,
    pub point_lights: usize,
    pub cameras: usize,
    pub camera_controllers: usize,
}

impl SceneCensus {
    /// Expected census for a scene of `mesh_count` animated meshes.
    pub fn for_mesh_count(mesh_count: usize) -> Self {
        Self {
            meshes: mesh_count,
            grounds: 1,
            directional_lights: 1,
            ambient_lights: 1,
            point_lights: 2,
            cameras: 1,
            camera_controllers: 1,
        }
    }
}

impl SceneGraph {
    /// Counts the recorded nodes that are still alive in `world`. Ambient
    /// light and camera controller are resources and count when present.
    pub fn census(&self, world: &World) -> SceneCensus {
        let alive = |entity: &Entity| world.entities().contains(*entity);

        SceneCensus {
            meshes: self.meshes.iter().filter(|e| alive(e)).count(),
            grounds: usize::from(alive(&self.ground)),
            directional_lights: usize::from(alive(&self.directional_light)),
            ambient_lights: usize::from(world.contains_resource::<AmbientLight>()),
            point_lights: self.point_lights.iter().filter(|e| alive(e)).count(),
            cameras: usize::from(alive(&self.camera)),
            camera_controllers: usize::from(world.contains_resource::<OrbitController>()),
        }
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        [self.camera, self.directional_light, self.ground]
            .into_iter()
            .chain(self.point_lights)
            .chain(self.meshes.iter().copied())
    }
}

/// Builds the fixed scene: camera with orbit controller, lights, ground and
/// `profile.mesh_count` animated meshes with freshly drawn specs.
pub fn compose_scene(
    mut commands: Commands,
    profile: Res<SceneProfile>,
    mut rng: ResMut<SceneRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut wobble_materials: ResMut<Assets<WobbleMaterial>>,
    mut shadow_materials: ResMut<Assets<ShadowCatcherMaterial>>,
    existing: Option<Res<SceneGraph>>,
) {
    if existing.is_some() {
        warn!("Scene graph already composed, ignoring repeated mount");
        return;
    }

    let mut controller = OrbitController::from_profile(profile.orbit, CAMERA_POSITION, ORBIT_TARGET);
    controller.update();

    let camera = spawn_camera(&mut commands, &controller);
    let directional_light = spawn_directional_light(&mut commands);
    insert_ambient_light(&mut commands);
    let point_lights = spawn_point_lights(&mut commands);
    let ground = spawn_ground(&mut commands, &mut meshes, &mut shadow_materials);

    let mut mesh_entities = Vec::with_capacity(profile.mesh_count);
    for index in 0..profile.mesh_count {
        let mut spec = generate_mesh_spec(&mut rng.0);
        spec.position = profile.placement.place(spec.position);
        match serde_json::to_string(&spec) {
            Ok(json) => debug!("Mesh {index} spec: {json}"),
            Err(err) => warn!("Mesh {index} spec not serialisable: {err}"),
        }

        let mesh = meshes.add(profile.geometry.build(&spec));
        let colour = spec.colour;
        let mut entity = commands.spawn((
            Name::new(format!("Spinning Mesh {index}")),
            Mesh3d(mesh),
            Transform::from_translation(spec.position),
            RotationState::default(),
            SpinningMesh { spec },
        ));
        attach_material(
            &mut entity,
            profile.material,
            colour,
            &mut standard_materials,
            &mut wobble_materials,
        );
        mesh_entities.push(entity.id());
    }

    let graph = SceneGraph {
        camera,
        directional_light,
        point_lights,
        ground,
        meshes: mesh_entities,
    };

    info!(
        "Scene composed: {} {:?} meshes, {:?} material, {:?} orbit ({} nodes)",
        graph.meshes.len(),
        profile.geometry,
        profile.material,
        profile.orbit,
        graph.entities().count(),
    );

    commands.insert_resource(controller);
    commands.insert_resource(graph);
}

fn spawn_camera(commands: &mut Commands, controller: &OrbitController) -> Entity {
    let shadow_filtering = if SOFT_SHADOWS {
        ShadowFilteringMethod::Gaussian
    } else {
        ShadowFilteringMethod::Hardware2x2
    };

    commands
        .spawn((
            Name::new("Camera"),
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: CAMERA_FOV_DEGREES.to_radians(),
                ..default()
            }),
            controller.camera_transform(),
            shadow_filtering,
            OrbitCamera,
        ))
        .id()
}
