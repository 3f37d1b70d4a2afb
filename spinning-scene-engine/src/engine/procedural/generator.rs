use bevy::prelude::*;
use constants::procedural::{COLOUR_B, COLOUR_G, COLOUR_R, DIMENSION, POSITION_X, POSITION_Y, POSITION_Z};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::colour::RgbColour;
use crate::engine::mesh::spec::{BoxArgs, MeshSpec};

/// Random source consumed by the scene composer.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    /// Deterministic source for reproducible scenes.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SceneRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

/// Integer-valued position inside the spawn volume.
pub fn generate_position<R: Rng>(rng: &mut R) -> Vec3 {
    let x = rng.random_range(POSITION_X);
    let y = rng.random_range(POSITION_Y);
    let z = rng.random_range(POSITION_Z);

    IVec3::new(x, y, z).as_vec3()
}

/// Integer width, height and depth; segment counts are left unset.
pub fn generate_dimensions<R: Rng>(rng: &mut R) -> BoxArgs {
    let width = rng.random_range(DIMENSION);
    let height = rng.random_range(DIMENSION);
    let depth = rng.random_range(DIMENSION);

    BoxArgs::sized(width as f32, height as f32, depth as f32)
}

pub fn generate_colour<R: Rng>(rng: &mut R) -> RgbColour {
    let r = rng.random_range(COLOUR_R);
    let g = rng.random_range(COLOUR_G);
    let b = rng.random_range(COLOUR_B);

    RgbColour::new(r, g, b)
}

/// Draws position, dimensions and colour, in that order.
pub fn generate_mesh_spec<R: Rng>(rng: &mut R) -> MeshSpec {
    let position = generate_position(rng);
    let dimensions = generate_dimensions(rng);
    let colour = generate_colour(rng);

    MeshSpec {
        position,
        dimensions,
        colour,
    }
}
