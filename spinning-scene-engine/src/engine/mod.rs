pub mod camera;
pub mod core;
pub mod material;
pub mod mesh;
pub mod procedural;
pub mod scene;
pub mod systems;
