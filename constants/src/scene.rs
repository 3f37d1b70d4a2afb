/// Edge length of the square ground plane.
pub const GROUND_SIZE: f32 = 100.0;

/// Height of the ground plane below the origin.
pub const GROUND_HEIGHT: f32 = -3.0;

/// Opacity of the shadow receiving ground.
pub const GROUND_SHADOW_OPACITY: f32 = 0.3;

/// CSS selector of the container the scene mounts into on the web.
pub const MOUNT_SELECTOR: &str = "#app";

/// Id of the canvas created inside a container that is not itself a canvas.
pub const MOUNT_CANVAS_ID: &str = "app-canvas";

pub const WINDOW_TITLE: &str = "Spinning Scene";
