mod common;

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use common::{camera_transform, controller, headless_app};
use constants::camera::{CAMERA_POSITION, FALLBACK_VIEWPORT_HEIGHT};
use spinning_scene_engine::SceneProfile;
use std::f32::consts::{FRAC_PI_3, TAU};

fn press_left(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
}

fn drag(app: &mut App, delta: Vec2) {
    app.world_mut().send_event(MouseMotion { delta });
    app.update();
}

fn scroll(app: &mut App, notches: f32) {
    app.world_mut().send_event(MouseWheel {
        unit: MouseScrollUnit::Line,
        x: 0.0,
        y: notches,
        window: Entity::PLACEHOLDER,
    });
    app.update();
}

fn touch(app: &mut App, id: u64, phase: TouchPhase, position: Vec2) {
    app.world_mut().send_event(TouchInput {
        phase,
        position,
        window: Entity::PLACEHOLDER,
        force: None,
        id,
    });
    app.update();
}

#[test]
fn locked_camera_starts_on_polar_band() {
    let mut app = headless_app(SceneProfile::wobble_dodecahedron(), 1);
    app.update();

    let orbit = controller(&app);
    assert_eq!(orbit.spherical.polar, FRAC_PI_3);

    let radius = CAMERA_POSITION.length();
    let transform = camera_transform(&mut app);
    assert!((transform.translation.length() - radius).abs() < 1e-3);
    assert!((transform.translation.y - radius * FRAC_PI_3.cos()).abs() < 1e-3);
}

#[test]
fn vertical_drag_keeps_locked_polar_angle() {
    let mut app = headless_app(SceneProfile::wobble_dodecahedron(), 1);
    app.update();
    let before = camera_transform(&mut app);
    let azimuth = controller(&app).spherical.azimuth;

    press_left(&mut app);
    drag(&mut app, Vec2::new(0.0, 200.0));
    drag(&mut app, Vec2::new(0.0, -350.0));

    let orbit = controller(&app);
    assert_eq!(orbit.spherical.polar, FRAC_PI_3);
    assert_eq!(orbit.spherical.azimuth, azimuth);
    assert_eq!(camera_transform(&mut app), before);
}

#[test]
fn horizontal_drag_turns_azimuth_proportionally() {
    let mut app = headless_app(SceneProfile::wobble_dodecahedron(), 1);
    app.update();
    let start = controller(&app).spherical.azimuth;

    press_left(&mut app);
    drag(&mut app, Vec2::new(72.0, 0.0));
    let first = controller(&app).spherical.azimuth - start;
    drag(&mut app, Vec2::new(144.0, 0.0));
    let second = controller(&app).spherical.azimuth - start - first;

    assert!((first + TAU * 72.0 / FALLBACK_VIEWPORT_HEIGHT).abs() < 1e-5);
    assert!((second - 2.0 * first).abs() < 1e-5);
    assert_eq!(controller(&app).spherical.polar, FRAC_PI_3);

    let transform = camera_transform(&mut app);
    assert!(transform.translation.abs_diff_eq(controller(&app).position(), 1e-5));
}

#[test]
fn motion_without_button_does_not_orbit() {
    let mut app = headless_app(SceneProfile::box_field(), 1);
    app.update();
    let before = controller(&app).spherical;

    drag(&mut app, Vec2::new(120.0, 40.0));

    assert_eq!(controller(&app).spherical, before);
}

#[test]
fn wheel_zoom_depends_on_profile() {
    let mut locked = headless_app(SceneProfile::wobble_dodecahedron(), 1);
    locked.update();
    let radius = controller(&locked).spherical.radius;
    scroll(&mut locked, 2.0);
    assert_eq!(controller(&locked).spherical.radius, radius);

    let mut free = headless_app(SceneProfile::box_field(), 1);
    free.update();
    let radius = controller(&free).spherical.radius;
    scroll(&mut free, 2.0);
    assert!(controller(&free).spherical.radius < radius);
}

#[test]
fn free_camera_orbits_vertically() {
    let mut app = headless_app(SceneProfile::box_field(), 1);
    app.update();
    let polar = controller(&app).spherical.polar;

    press_left(&mut app);
    drag(&mut app, Vec2::new(0.0, 36.0));

    let expected = polar - TAU * 36.0 / FALLBACK_VIEWPORT_HEIGHT;
    assert!((controller(&app).spherical.polar - expected).abs() < 1e-5);
}

#[test]
fn one_finger_touch_drag_orbits() {
    let mut app = headless_app(SceneProfile::wobble_dodecahedron(), 1);
    app.update();
    let start = controller(&app).spherical.azimuth;

    touch(&mut app, 0, TouchPhase::Started, Vec2::new(100.0, 100.0));
    touch(&mut app, 0, TouchPhase::Moved, Vec2::new(172.0, 100.0));

    let turned = controller(&app).spherical.azimuth - start;
    assert!((turned + TAU * 72.0 / FALLBACK_VIEWPORT_HEIGHT).abs() < 1e-5);
    assert_eq!(controller(&app).spherical.polar, FRAC_PI_3);
}

#[test]
fn two_finger_touch_does_not_orbit() {
    let mut app = headless_app(SceneProfile::wobble_dodecahedron(), 1);
    app.update();
    let before = controller(&app).spherical;

    touch(&mut app, 0, TouchPhase::Started, Vec2::new(100.0, 100.0));
    touch(&mut app, 1, TouchPhase::Started, Vec2::new(200.0, 100.0));
    touch(&mut app, 0, TouchPhase::Moved, Vec2::new(160.0, 100.0));

    assert_eq!(controller(&app).spherical, before);
}
