/// Shadow map resolution of the directional light (square).
pub const SHADOW_MAP_SIZE: usize = 1024;

/// Far bound of the directional light's shadow cascade.
pub const SHADOW_MAX_DISTANCE: f32 = 50.0;

/// Global soft shadow toggle; selects Gaussian filtering on the camera.
pub const SOFT_SHADOWS: bool = true;

/// Default tracing filter for the log plugin.
pub const LOG_FILTER: &str = "wgpu=error,naga=warn,spinning_scene_engine=debug";
