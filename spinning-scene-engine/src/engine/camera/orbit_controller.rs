use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::{
    FALLBACK_VIEWPORT_HEIGHT, LOCKED_POLAR_ANGLE, ORBIT_DAMPING_FACTOR, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SCALE, ORBIT_ZOOM_SPEED, POLAR_EPSILON,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

/// Wheel notches per pixel of precise (touchpad) scrolling.
const NOTCHES_PER_PIXEL: f32 = 0.05;

/// Constraint presets for the orbit controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitProfile {
    /// Zoom disabled and the polar angle pinned to π/3: horizontal orbit only.
    Locked,
    /// Full sphere orbit with zoom.
    Free,
}

/// Marks the camera entity driven by the [`OrbitController`].
#[derive(Component)]
pub struct OrbitCamera;

/// Camera offset from the target in spherical coordinates.
///
/// `polar` is measured from +Y, `azimuth` around +Y starting at +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                polar: 0.0,
                azimuth: 0.0,
            };
        }

        Self {
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let ring = self.polar.sin() * self.radius;
        Vec3::new(
            ring * self.azimuth.sin(),
            self.polar.cos() * self.radius,
            ring * self.azimuth.cos(),
        )
    }
}

#[derive(Resource, Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    pub spherical: Spherical,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_azimuth_angle: f32,
    pub max_azimuth_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_damping: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    pending_polar: f32,
    pending_azimuth: f32,
    pending_scale: f32,
}

impl OrbitController {
    /// Unconstrained controller orbiting `target` from `camera_position`.
    pub fn new(camera_position: Vec3, target: Vec3) -> Self {
        Self {
            target,
            spherical: Spherical::from_offset(camera_position - target),
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            enable_rotate: true,
            enable_zoom: true,
            enable_damping: false,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            damping_factor: ORBIT_DAMPING_FACTOR,
            pending_polar: 0.0,
            pending_azimuth: 0.0,
            pending_scale: 1.0,
        }
    }

    pub fn from_profile(profile: OrbitProfile, camera_position: Vec3, target: Vec3) -> Self {
        let controller = Self::new(camera_position, target);
        match profile {
            OrbitProfile::Free => controller,
            OrbitProfile::Locked => Self {
                min_polar_angle: LOCKED_POLAR_ANGLE,
                max_polar_angle: LOCKED_POLAR_ANGLE,
                enable_zoom: false,
                ..controller
            },
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.pending_azimuth -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.pending_polar -= angle;
    }

    /// Queues rotation for a pointer drag of `delta` pixels. A drag across the
    /// full viewport height turns the camera by one revolution.
    pub fn drag(&mut self, delta: Vec2, viewport_height: f32) {
        if !self.enable_rotate || viewport_height <= 0.0 {
            return;
        }

        let radians_per_pixel = TAU * self.rotate_speed / viewport_height;
        self.rotate_left(delta.x * radians_per_pixel);
        self.rotate_up(delta.y * radians_per_pixel);
    }

    /// Positive notches move the camera towards the target.
    pub fn zoom(&mut self, notches: f32) {
        if !self.enable_zoom || notches == 0.0 {
            return;
        }

        self.pending_scale *= ORBIT_ZOOM_SCALE.powf(self.zoom_speed * notches);
    }

    /// Applies queued input and constraints. Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        let before = self.spherical;

        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        self.spherical.azimuth += self.pending_azimuth * step;
        self.spherical.polar += self.pending_polar * step;

        if self.min_azimuth_angle.is_finite() && self.max_azimuth_angle.is_finite() {
            self.spherical.azimuth = self
                .spherical
                .azimuth
                .clamp(self.min_azimuth_angle, self.max_azimuth_angle);
        }

        self.spherical.polar = self
            .spherical
            .polar
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.spherical.radius = (self.spherical.radius * self.pending_scale)
            .clamp(self.min_distance, self.max_distance);

        if self.enable_damping {
            self.pending_azimuth *= 1.0 - self.damping_factor;
            self.pending_polar *= 1.0 - self.damping_factor;
        } else {
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
        }
        self.pending_scale = 1.0;

        self.spherical != before
    }

    pub fn position(&self) -> Vec3 {
        self.target + self.spherical.to_offset()
    }

    pub fn camera_transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

/// Last known position of every finger on the screen.
#[derive(Debug, Default)]
pub struct TouchDrag {
    active: HashMap<u64, Vec2>,
}

impl TouchDrag {
    /// Records `touch` and returns the drag it contributes: its movement
    /// while it is the only finger down, zero otherwise.
    pub fn track(&mut self, touch: &TouchInput) -> Vec2 {
        match touch.phase {
            TouchPhase::Started => {
                self.active.insert(touch.id, touch.position);
                Vec2::ZERO
            }
            TouchPhase::Moved => {
                let single = self.active.len() == 1;
                match self.active.insert(touch.id, touch.position) {
                    Some(previous) if single => touch.position - previous,
                    _ => Vec2::ZERO,
                }
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                self.active.remove(&touch.id);
                Vec2::ZERO
            }
        }
    }
}

/// Feeds left button mouse drags, one finger touch drags and wheel notches
/// into the controller. Events are drained every frame, including after the
/// scene has been unmounted.
pub fn orbit_input_system(
    controller: Option<ResMut<OrbitController>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut touch_events: EventReader<TouchInput>,
    mut touches: Local<TouchDrag>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let mouse_drag: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    let touch_drag: Vec2 = touch_events.read().map(|touch| touches.track(touch)).sum();
    let notches: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * NOTCHES_PER_PIXEL,
        })
        .sum();

    let Some(mut controller) = controller else {
        return;
    };

    let mut drag = touch_drag;
    if mouse_button.pressed(MouseButton::Left) {
        drag += mouse_drag;
    }

    if drag != Vec2::ZERO {
        let viewport_height = windows
            .single()
            .map(|window| window.height())
            .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
        controller.drag(drag, viewport_height);
    }

    if notches != 0.0 {
        controller.zoom(notches);
    }
}

/// Per-frame controller step; only touches the camera transform when it moved.
pub fn orbit_camera_system(
    controller: Option<ResMut<OrbitController>>,
    mut cameras: Query<&mut Transform, With<OrbitCamera>>,
) {
    let Some(mut controller) = controller else {
        return;
    };

    if !controller.update() {
        return;
    }

    let camera_transform = controller.camera_transform();
    for mut transform in &mut cameras {
        *transform = camera_transform;
    }
}
