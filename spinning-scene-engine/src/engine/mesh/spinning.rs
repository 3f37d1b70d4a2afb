use bevy::prelude::*;
use constants::animation::ROTATION_STEP;

use super::spec::MeshSpec;

/// Marks an animated solid and keeps the spec it was built from.
#[derive(Component, Debug, Clone)]
pub struct SpinningMesh {
    pub spec: MeshSpec,
}

/// Spin angle after `frames` steps, wrapped into `[0, 2π)`.
///
/// Computed from the frame count in f64 so the angle carries no accumulated
/// rounding error however long the scene runs.
pub fn spin_angle(frames: u64) -> f32 {
    (frames as f64 * ROTATION_STEP).rem_euclid(std::f64::consts::TAU) as f32
}

/// Euler angles of a spinning mesh, kept in `[0, 2π)`, together with the
/// number of steps taken so far.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub frames: u64,
    pub x: f32,
    pub y: f32,
}

impl RotationState {
    pub fn after_frames(frames: u64) -> Self {
        let angle = spin_angle(frames);
        Self {
            frames,
            x: angle,
            y: angle,
        }
    }

    pub fn advance(&mut self) {
        *self = Self::after_frames(self.frames + 1);
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Per-frame spin. Writes straight into each mesh's transform; a mesh whose
/// transform is gone is not matched and keeps its last angles.
pub fn spin_meshes(mut meshes: Query<(&mut RotationState, &mut Transform), With<SpinningMesh>>) {
    for (mut rotation, mut transform) in &mut meshes {
        rotation.advance();
        transform.rotation = rotation.to_quat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn advance_wraps_around_full_turn() {
        // 629 steps of 0.01 is just past one full turn.
        let mut rotation = RotationState::after_frames(628);
        rotation.advance();

        let expected = 6.29 - TAU;
        assert_eq!(rotation.frames, 629);
        assert!((rotation.x - expected).abs() < 1e-6);
        assert_eq!(rotation.x, rotation.y);
    }

    #[test]
    fn angles_do_not_drift_over_long_runs() {
        let mut rotation = RotationState::default();
        for _ in 0..36_000 {
            rotation.advance();
        }

        let expected = (36_000.0_f64 * 0.01).rem_euclid(std::f64::consts::TAU) as f32;
        assert!((rotation.x - expected).abs() < 1e-6, "x = {}", rotation.x);
        assert!((rotation.y - expected).abs() < 1e-6, "y = {}", rotation.y);

        // One hour at 60 frames per second.
        let hour = spin_angle(216_000);
        let expected = (2_160.0_f64).rem_euclid(std::f64::consts::TAU) as f32;
        assert!((hour - expected).abs() < 1e-6);
    }

    #[test]
    fn quaternion_matches_euler_angles() {
        let rotation = RotationState {
            frames: 30,
            x: 0.3,
            y: 0.3,
        };
        let expected = Quat::from_rotation_x(0.3) * Quat::from_rotation_y(0.3);

        assert!(rotation.to_quat().abs_diff_eq(expected, 1e-6));
    }
}
