//! Application setup for native and WASM targets.
//!
//! The scene behaviour lives in a render-agnostic plugin; the windowed app
//! adds rendering, diagnostics and the browser mount on top of it.

/// Windowed app construction: default plugins, logging, shadow settings.
pub mod app_setup;

/// Verifies the browser container the canvas mounts into.
pub mod mount_point;

/// Plugin registering scene composition and every per-frame system.
pub mod scene_plugin;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
