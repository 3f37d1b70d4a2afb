//! Surface materials of the animated meshes.

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::procedural::colour::RgbColour;
use wobble::{WobbleMaterial, wobble_material};

pub mod shadow_catcher;
/// Vertex-displacing extension of the standard material.
pub mod wobble;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialKind {
    /// Plain lit surface in the mesh colour.
    Flat,
    /// Lit surface twisted about Y over time.
    Wobble { factor: f32, speed: f32 },
}

/// Adds the material selected by `kind`, tinted with `colour`, to a spawned mesh.
pub fn attach_material(
    entity: &mut EntityCommands,
    kind: MaterialKind,
    colour: RgbColour,
    standard_materials: &mut Assets<StandardMaterial>,
    wobble_materials: &mut Assets<WobbleMaterial>,
) {
    match kind {
        MaterialKind::Flat => {
            entity.insert(MeshMaterial3d(standard_materials.add(StandardMaterial {
                base_color: colour.to_color(),
                ..default()
            })));
        }
        MaterialKind::Wobble { factor, speed } => {
            entity.insert(MeshMaterial3d(
                wobble_materials.add(wobble_material(colour, factor, speed)),
            ));
        }
    }
}
