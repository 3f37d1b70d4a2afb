//! Compile-time constants shared by the spinning scene engine.

pub mod animation;
pub mod camera;
pub mod lighting;
pub mod procedural;
pub mod render_settings;
pub mod scene;
