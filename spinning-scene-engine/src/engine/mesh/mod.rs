//! Animated solid meshes and the geometry they are built from.
//!
//! A mesh is parameterised once by a [`spec::MeshSpec`] and afterwards only
//! its rotation changes, mutated in place by the per-frame spin system.

/// Immutable per-mesh parameters drawn at mount time.
pub mod spec;

/// Box and dodecahedron mesh builders.
pub mod geometry;

/// Spinning mesh component, rotation state and the per-frame spin system.
pub mod spinning;
