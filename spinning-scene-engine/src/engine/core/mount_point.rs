use thiserror::Error;

/// Fatal start-up failures; the app does not start without its container.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("mount point `{0}` not found in document")]
    MissingContainer(String),
    #[error("browser window unavailable")]
    NoWindow,
    #[error("browser window has no document")]
    NoDocument,
    #[error("could not attach a canvas to `{selector}`: {reason}")]
    CanvasAttach { selector: String, reason: String },
}

pub fn is_canvas_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("canvas")
}

/// Selector of the canvas created inside a non-canvas container.
pub fn mounted_canvas_selector(canvas_id: &str) -> String {
    format!("#{canvas_id}")
}

/// Finds the container behind `selector` and returns the selector of the
/// canvas to render into. A container that is not a canvas gets one appended
/// (reused on a second mount).
#[cfg(target_arch = "wasm32")]
pub fn prepare_mount_point(selector: &str) -> Result<String, MountError> {
    use constants::scene::MOUNT_CANVAS_ID;

    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    let container = match document.query_selector(selector) {
        Ok(Some(container)) => container,
        _ => return Err(MountError::MissingContainer(selector.to_string())),
    };

    if is_canvas_tag(&container.tag_name()) {
        return Ok(selector.to_string());
    }

    if document.get_element_by_id(MOUNT_CANVAS_ID).is_none() {
        let canvas = document
            .create_element("canvas")
            .map_err(|err| attach_error(selector, err))?;
        canvas.set_id(MOUNT_CANVAS_ID);
        container
            .append_child(&canvas)
            .map_err(|err| attach_error(selector, err))?;
    }

    Ok(mounted_canvas_selector(MOUNT_CANVAS_ID))
}

#[cfg(target_arch = "wasm32")]
fn attach_error(selector: &str, err: impl std::fmt::Debug) -> MountError {
    MountError::CanvasAttach {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    }
}

/// Native builds open their own window, so there is nothing to find.
#[cfg(not(target_arch = "wasm32"))]
pub fn prepare_mount_point(selector: &str) -> Result<String, MountError> {
    Ok(selector.to_string())
}
