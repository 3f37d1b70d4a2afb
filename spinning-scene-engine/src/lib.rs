pub mod engine;

pub use engine::core::scene_plugin::SpinningScenePlugin;
pub use engine::scene::profile::SceneProfile;
