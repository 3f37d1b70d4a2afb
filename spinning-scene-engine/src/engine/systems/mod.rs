//! Runtime systems outside the scene graph itself.

/// FPS text overlay for native builds.
pub mod fps_tracking;

/// Scene teardown and release of every per-frame mutation target.
pub mod unmount;
