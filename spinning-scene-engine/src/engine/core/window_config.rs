use bevy::prelude::*;
use bevy::window::PresentMode;

/// Window rendering into the canvas behind `canvas_selector`.
#[cfg(target_arch = "wasm32")]
pub fn create_window_config(canvas_selector: &str) -> Window {
    Window {
        canvas: Some(canvas_selector.into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: false,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}

/// Native windows ignore the canvas selector.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_window_config(_canvas_selector: &str) -> Window {
    use constants::scene::WINDOW_TITLE;
    Window {
        title: WINDOW_TITLE.into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
