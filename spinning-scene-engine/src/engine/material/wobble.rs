use bevy::pbr::{ExtendedMaterial, MaterialExtension};
use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};

use crate::engine::procedural::colour::RgbColour;

const WOBBLE_SHADER_PATH: &str = "shaders/wobble.wgsl";

/// Standard PBR material whose vertices twist about Y.
pub type WobbleMaterial = ExtendedMaterial<StandardMaterial, WobbleExtension>;

#[derive(Debug, Clone, Copy, ShaderType, Reflect)]
pub struct WobbleSettings {
    pub factor: f32,
    pub speed: f32,
    // WebGL2 uniforms must be 16 byte aligned.
    pub _padding: Vec2,
}

/// Twist angle is `sin(time * speed + y) / 2 * factor`, evaluated in the
/// vertex shader against the global shader clock.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone)]
pub struct WobbleExtension {
    #[uniform(100)]
    pub settings: WobbleSettings,
}

impl WobbleExtension {
    pub fn new(factor: f32, speed: f32) -> Self {
        Self {
            settings: WobbleSettings {
                factor,
                speed,
                _padding: Vec2::ZERO,
            },
        }
    }
}

impl MaterialExtension for WobbleExtension {
    fn vertex_shader() -> ShaderRef {
        WOBBLE_SHADER_PATH.into()
    }
}

pub fn wobble_material(colour: RgbColour, factor: f32, speed: f32) -> WobbleMaterial {
    ExtendedMaterial {
        base: StandardMaterial {
            base_color: colour.to_color(),
            ..default()
        },
        extension: WobbleExtension::new(factor, speed),
    }
}
