use bevy::math::Vec3;

// Light intensities are authored on a relative scale (1.0 = a plain white
// light) and scaled into physical units when spawned.

/// Lux per unit of relative directional intensity.
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 4_000.0;

/// Ambient brightness per unit of relative ambient intensity.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 1_000.0;

/// Lumens per unit of relative point light intensity.
pub const POINT_LUMENS_PER_UNIT: f32 = 1_000_000.0;

pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 10.0, 0.0);
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 1.4;

pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.3;

/// Point light placement and relative intensity.
pub struct PointLightSetup {
    pub position: Vec3,
    pub intensity: f32,
}

pub const POINT_LIGHTS: [PointLightSetup; 2] = [
    PointLightSetup {
        position: Vec3::new(-10.0, 0.0, -20.0),
        intensity: 0.5,
    },
    PointLightSetup {
        position: Vec3::new(0.0, -10.0, -20.0),
        intensity: 1.5,
    },
];

/// Point lights need range to reach the scene from behind the far plane of meshes.
pub const POINT_LIGHT_RANGE: f32 = 60.0;
