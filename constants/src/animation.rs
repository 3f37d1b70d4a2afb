/// Radians added to both rotation axes of every animated mesh per rendered frame.
pub const ROTATION_STEP: f64 = 0.01;

/// Angular displacement scale of the wobble material.
pub const WOBBLE_FACTOR: f32 = 1.0;

/// Multiplier applied to the shader clock before the wobble displacement.
pub const WOBBLE_SPEED: f32 = 14.0;

/// Mesh count of the single dodecahedron profile.
pub const WOBBLE_MESH_COUNT: usize = 1;

/// Mesh count of the box field profile.
pub const BOX_FIELD_MESH_COUNT: usize = 5;

pub const DODECAHEDRON_RADIUS: f32 = 1.0;
pub const DODECAHEDRON_DETAIL: u32 = 0;
