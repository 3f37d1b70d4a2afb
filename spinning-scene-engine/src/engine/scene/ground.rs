use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use constants::scene::{GROUND_HEIGHT, GROUND_SHADOW_OPACITY, GROUND_SIZE};

use crate::engine::material::shadow_catcher::ShadowCatcherMaterial;

#[derive(Component)]
pub struct GroundPlane;

/// Horizontal plane below the meshes that only shows the shadows it receives.
/// Casts none.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ShadowCatcherMaterial>,
) -> Entity {
    commands
        .spawn((
            Name::new("Ground"),
            GroundPlane,
            Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
            MeshMaterial3d(materials.add(ShadowCatcherMaterial::with_opacity(
                GROUND_SHADOW_OPACITY,
            ))),
            Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
            NotShadowCaster,
        ))
        .id()
}
