//! Fixed scene graph composition.
//!
//! The whole graph is spawned once at start-up; afterwards only mesh
//! rotations and the camera transform change.

/// Mount-time composition system and the scene graph record.
pub mod composer;

/// Shadow receiving ground plane.
pub mod ground;

/// Directional, ambient and point lights.
pub mod lighting;

/// Scene configuration presets.
pub mod profile;
