//! Randomised mesh parameters drawn once per mesh at scene mount.
//!
//! Every generator takes the random source explicitly so the composer can be
//! driven by OS entropy in the app and by a seeded source under test.

/// RGB colour value with `rgb(r,g,b)` string encoding.
pub mod colour;

/// Position, dimension and colour generators plus the `SceneRng` resource.
pub mod generator;
