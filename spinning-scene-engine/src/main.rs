use constants::scene::MOUNT_SELECTOR;
use spinning_scene_engine::SceneProfile;
use spinning_scene_engine::engine::core::app_setup::create_app;
use spinning_scene_engine::engine::core::mount_point::{MountError, prepare_mount_point};

fn main() -> Result<(), MountError> {
    let canvas_selector = prepare_mount_point(MOUNT_SELECTOR)?;

    let mut app = create_app(selected_profile(), &canvas_selector);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }

    Ok(())
}

fn selected_profile() -> SceneProfile {
    if cfg!(feature = "box-field") {
        SceneProfile::box_field()
    } else {
        SceneProfile::wobble_dodecahedron()
    }
}
