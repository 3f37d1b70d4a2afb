use bevy::prelude::*;
use constants::animation::{
    BOX_FIELD_MESH_COUNT, DODECAHEDRON_DETAIL, DODECAHEDRON_RADIUS, WOBBLE_FACTOR,
    WOBBLE_MESH_COUNT, WOBBLE_SPEED,
};
use serde::{Deserialize, Serialize};

use crate::engine::camera::orbit_controller::OrbitProfile;
use crate::engine::material::MaterialKind;
use crate::engine::mesh::geometry::GeometryKind;

/// Where a mesh sits relative to its generated position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshPlacement {
    /// The full generated position.
    #[default]
    Generated,
    /// Only the generated x offset, on the x axis.
    XAxis,
}

impl MeshPlacement {
    pub fn place(self, generated: Vec3) -> Vec3 {
        match self {
            MeshPlacement::Generated => generated,
            MeshPlacement::XAxis => Vec3::new(generated.x, 0.0, 0.0),
        }
    }
}

/// What the composer builds: how many meshes, their shape, surface and
/// placement, and how the camera may orbit.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneProfile {
    pub mesh_count: usize,
    pub geometry: GeometryKind,
    pub material: MaterialKind,
    #[serde(default)]
    pub placement: MeshPlacement,
    pub orbit: OrbitProfile,
}

impl SceneProfile {
    /// One wobbling dodecahedron, horizontal orbit only.
    pub fn wobble_dodecahedron() -> Self {
        Self {
            mesh_count: WOBBLE_MESH_COUNT,
            geometry: GeometryKind::Dodecahedron {
                radius: DODECAHEDRON_RADIUS,
                detail: DODECAHEDRON_DETAIL,
            },
            material: MaterialKind::Wobble {
                factor: WOBBLE_FACTOR,
                speed: WOBBLE_SPEED,
            },
            placement: MeshPlacement::XAxis,
            orbit: OrbitProfile::Locked,
        }
    }

    /// Five flat coloured boxes with a free orbit camera.
    pub fn box_field() -> Self {
        Self {
            mesh_count: BOX_FIELD_MESH_COUNT,
            geometry: GeometryKind::Cuboid,
            material: MaterialKind::Flat,
            placement: MeshPlacement::Generated,
            orbit: OrbitProfile::Free,
        }
    }
}

impl Default for SceneProfile {
    fn default() -> Self {
        Self::wobble_dodecahedron()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_reads_from_json() {
        let json = r#"{
            "mesh_count": 5,
            "geometry": { "kind": "cuboid" },
            "material": { "kind": "flat" },
            "orbit": "free"
        }"#;

        let profile: SceneProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, SceneProfile::box_field());
    }

    #[test]
    fn default_is_the_wobbling_dodecahedron() {
        let profile = SceneProfile::default();
        assert_eq!(profile.mesh_count, 1);
        assert_eq!(profile.orbit, OrbitProfile::Locked);
        assert!(matches!(profile.geometry, GeometryKind::Dodecahedron { .. }));
        assert_eq!(profile.placement, MeshPlacement::XAxis);
    }

    #[test]
    fn x_axis_placement_drops_y_and_z() {
        let generated = Vec3::new(7.0, 3.0, -4.0);

        assert_eq!(MeshPlacement::XAxis.place(generated), Vec3::new(7.0, 0.0, 0.0));
        assert_eq!(MeshPlacement::Generated.place(generated), generated);
    }
}
