use bevy::math::Vec3;

/// Initial camera position; the camera always looks at the origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(-5.0, 2.0, 10.0);

pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Orbit target point.
pub const ORBIT_TARGET: Vec3 = Vec3::ZERO;

/// Polar angle used as both minimum and maximum by the locked orbit profile.
pub const LOCKED_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

/// Viewport height used to scale drag gestures when no primary window exists.
pub const FALLBACK_VIEWPORT_HEIGHT: f32 = 720.0;

pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;

/// Radius multiplier per wheel notch at zoom speed 1.
pub const ORBIT_ZOOM_SCALE: f32 = 0.95;

/// Fraction of the pending orbit delta applied per frame when damping is enabled.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;

/// Keeps the polar angle away from the poles so `looking_at` stays defined.
pub const POLAR_EPSILON: f32 = 1.0e-6;
