use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::spec::{BoxArgs, MeshSpec};

/// Solid shape of every animated mesh in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryKind {
    /// Axis-aligned box sized by the mesh spec.
    Cuboid,
    /// Regular dodecahedron; the spec's box arguments are ignored.
    Dodecahedron { radius: f32, detail: u32 },
}

impl GeometryKind {
    pub fn build(&self, spec: &MeshSpec) -> Mesh {
        match *self {
            Self::Cuboid => cuboid_mesh(&spec.dimensions),
            Self::Dodecahedron { radius, detail } => dodecahedron_mesh(radius, detail),
        }
    }
}

/// Box mesh; faces are only subdivided when segment counts ask for it.
pub fn cuboid_mesh(args: &BoxArgs) -> Mesh {
    let size = args.size();
    let segments = args.segments();

    if segments == UVec3::ONE {
        return Mesh::from(Cuboid::from_size(size));
    }

    subdivided_cuboid_mesh(size, segments)
}

// (outward normal, face u axis). The v axis is normal x u so every face
// winds counter-clockwise when seen from outside.
const BOX_FACES: [(Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_X, Vec3::Z),
    (Vec3::Y, Vec3::X),
    (Vec3::NEG_Y, Vec3::X),
    (Vec3::Z, Vec3::X),
    (Vec3::NEG_Z, Vec3::NEG_X),
];

fn subdivided_cuboid_mesh(size: Vec3, segments: UVec3) -> Mesh {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    for (normal, u_axis) in BOX_FACES {
        let v_axis = normal.cross(u_axis);
        let (n, u, v) = (axis_index(normal), axis_index(u_axis), axis_index(v_axis));
        let (grid_u, grid_v) = (segments[u], segments[v]);
        let base = positions.len() as u32;

        for iv in 0..=grid_v {
            for iu in 0..=grid_u {
                let fu = iu as f32 / grid_u as f32;
                let fv = iv as f32 / grid_v as f32;
                let point = normal * size[n] * 0.5
                    + u_axis * (fu - 0.5) * size[u]
                    + v_axis * (fv - 0.5) * size[v];

                positions.push(point.to_array());
                normals.push(normal.to_array());
                uvs.push([fu, 1.0 - fv]);
            }
        }

        let row = grid_u + 1;
        for iv in 0..grid_v {
            for iu in 0..grid_u {
                let a = base + iv * row + iu;
                let b = a + 1;
                let c = a + row + 1;
                let d = a + row;
                indices.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }
    }

    triangle_mesh(positions, normals, uvs, indices)
}

fn axis_index(axis: Vec3) -> usize {
    if axis.x != 0.0 {
        0
    } else if axis.y != 0.0 {
        1
    } else {
        2
    }
}

// Corner indices of the 36 triangles (three per pentagon) of the unit dodecahedron.
const DODECAHEDRON_FACES: [usize; 108] = [
    3, 11, 7, 3, 7, 15, 3, 15, 13, //
    7, 19, 17, 7, 17, 6, 7, 6, 15, //
    17, 4, 8, 17, 8, 10, 17, 10, 6, //
    8, 0, 16, 8, 16, 2, 8, 2, 10, //
    0, 12, 1, 0, 1, 18, 0, 18, 16, //
    6, 10, 2, 6, 2, 13, 6, 13, 15, //
    2, 16, 18, 2, 18, 3, 2, 3, 13, //
    18, 1, 9, 18, 9, 11, 18, 11, 3, //
    4, 14, 12, 4, 12, 0, 4, 0, 8, //
    11, 9, 5, 11, 5, 19, 11, 19, 7, //
    19, 5, 14, 19, 14, 4, 19, 4, 17, //
    1, 12, 14, 1, 14, 5, 1, 5, 9, //
];

fn dodecahedron_vertices() -> [Vec3; 20] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let r = 1.0 / t;

    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, -r, -t),
        Vec3::new(0.0, -r, t),
        Vec3::new(0.0, r, -t),
        Vec3::new(0.0, r, t),
        Vec3::new(-r, -t, 0.0),
        Vec3::new(-r, t, 0.0),
        Vec3::new(r, -t, 0.0),
        Vec3::new(r, t, 0.0),
        Vec3::new(-t, 0.0, -r),
        Vec3::new(t, 0.0, -r),
        Vec3::new(-t, 0.0, r),
        Vec3::new(t, 0.0, r),
    ]
}

/// Dodecahedron inscribed in a sphere of `radius`.
///
/// Each base triangle is split into `(detail + 1)^2` triangles whose corners
/// are pushed out onto the sphere. Detail zero keeps flat face normals, any
/// higher detail shades smoothly with radial normals.
pub fn dodecahedron_mesh(radius: f32, detail: u32) -> Mesh {
    let vertices = dodecahedron_vertices();
    let divisions = detail + 1;

    let mut triangles = Vec::new();
    for face in DODECAHEDRON_FACES.chunks_exact(3) {
        subdivide_triangle(
            vertices[face[0]],
            vertices[face[1]],
            vertices[face[2]],
            divisions,
            &mut triangles,
        );
    }

    let mut positions = Vec::with_capacity(triangles.len() * 3);
    let mut normals = Vec::with_capacity(triangles.len() * 3);
    let mut uvs = Vec::with_capacity(triangles.len() * 3);

    for triangle in triangles {
        let corners = triangle.map(|corner| corner.normalize() * radius);
        let face_normal = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .normalize();

        for corner in corners {
            let normal = if detail == 0 {
                face_normal
            } else {
                corner.normalize()
            };
            positions.push(corner.to_array());
            normals.push(normal.to_array());
            uvs.push(spherical_uv(corner));
        }
    }

    let indices = (0..positions.len() as u32).collect();
    triangle_mesh(positions, normals, uvs, indices)
}

fn subdivide_triangle(a: Vec3, b: Vec3, c: Vec3, divisions: u32, out: &mut Vec<[Vec3; 3]>) {
    let n = divisions as f32;
    let point = |i: u32, j: u32| a + (b - a) * (i as f32 / n) + (c - a) * (j as f32 / n);

    for i in 0..divisions {
        for j in 0..divisions - i {
            out.push([point(i, j), point(i + 1, j), point(i, j + 1)]);
            if i + j + 1 < divisions {
                out.push([point(i + 1, j), point(i + 1, j + 1), point(i, j + 1)]);
            }
        }
    }
}

fn spherical_uv(point: Vec3) -> [f32; 2] {
    let azimuth = point.z.atan2(-point.x);
    let inclination = (-point.y).atan2(Vec2::new(point.x, point.z).length());
    [azimuth / (2.0 * PI) + 0.5, inclination / PI + 0.5]
}

fn triangle_mesh(
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
) -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<Vec3> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => {
                values.iter().map(|p| Vec3::from_array(*p)).collect()
            }
            other => panic!("unexpected position attribute: {other:?}"),
        }
    }

    fn triangles(mesh: &Mesh) -> Vec<[Vec3; 3]> {
        let points = positions(mesh);
        let indices: Vec<usize> = mesh.indices().expect("indexed mesh").iter().collect();
        indices
            .chunks_exact(3)
            .map(|tri| [points[tri[0]], points[tri[1]], points[tri[2]]])
            .collect()
    }

    fn assert_outward(mesh: &Mesh) {
        for [a, b, c] in triangles(mesh) {
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward triangle {a} {b} {c}");
        }
    }

    #[test]
    fn unit_segment_box_matches_requested_size() {
        let mesh = cuboid_mesh(&BoxArgs::sized(2.0, 3.0, 4.0));
        let points = positions(&mesh);
        let max = points.iter().fold(Vec3::splat(f32::MIN), |acc, p| acc.max(*p));
        let min = points.iter().fold(Vec3::splat(f32::MAX), |acc, p| acc.min(*p));

        assert_eq!(max, Vec3::new(1.0, 1.5, 2.0));
        assert_eq!(min, Vec3::new(-1.0, -1.5, -2.0));
    }

    #[test]
    fn subdivided_box_grids_every_face() {
        let args = BoxArgs {
            width_segments: Some(2),
            height_segments: Some(3),
            depth_segments: Some(4),
            ..BoxArgs::sized(2.0, 2.0, 2.0)
        };
        let mesh = cuboid_mesh(&args);

        // +-X: 5x4 grid, +-Y: 3x5 grid, +-Z: 3x4 grid.
        assert_eq!(mesh.count_vertices(), 2 * (20 + 15 + 12));
        assert_eq!(triangles(&mesh).len(), 2 * (24 + 16 + 12));
        assert_outward(&mesh);
    }

    #[test]
    fn dodecahedron_sits_on_its_sphere() {
        let mesh = dodecahedron_mesh(2.5, 0);

        assert_eq!(mesh.count_vertices(), 36 * 3);
        for point in positions(&mesh) {
            assert!((point.length() - 2.5).abs() < 1e-4);
        }
        assert_outward(&mesh);
    }

    #[test]
    fn detail_subdivides_each_base_triangle() {
        let mesh = dodecahedron_mesh(1.0, 2);

        assert_eq!(triangles(&mesh).len(), 36 * 9);
        for point in positions(&mesh) {
            assert!((point.length() - 1.0).abs() < 1e-4);
        }
        assert_outward(&mesh);
    }
}
