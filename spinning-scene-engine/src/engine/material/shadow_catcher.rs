use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::{AsBindGroup, ShaderRef};

const SHADOW_CATCHER_SHADER_PATH: &str = "shaders/shadow_catcher.wgsl";

/// Invisible surface that only shows the shadows falling on it, blended in
/// `shadow_colour` at its alpha.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ShadowCatcherMaterial {
    #[uniform(0)]
    pub shadow_colour: LinearRgba,
}

impl ShadowCatcherMaterial {
    pub fn with_opacity(opacity: f32) -> Self {
        Self {
            shadow_colour: LinearRgba::new(0.0, 0.0, 0.0, opacity),
        }
    }
}

impl Material for ShadowCatcherMaterial {
    fn fragment_shader() -> ShaderRef {
        SHADOW_CATCHER_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_colour_is_black_at_requested_opacity() {
        let material = ShadowCatcherMaterial::with_opacity(0.3);

        assert_eq!(material.shadow_colour, LinearRgba::new(0.0, 0.0, 0.0, 0.3));
        assert_eq!(material.alpha_mode(), AlphaMode::Blend);
    }
}
