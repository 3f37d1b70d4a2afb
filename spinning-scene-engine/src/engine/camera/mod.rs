//! Orbit camera control around the scene origin.
//!
//! Drag gestures rotate the camera on a sphere around the target, the wheel
//! dollies along the view ray. The controller is stepped once per frame.

/// Orbit controller resource, spherical camera state and its input/update systems.
pub mod orbit_controller;
