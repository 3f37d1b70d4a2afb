use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::procedural::colour::RgbColour;

/// Box constructor arguments; unset values fall back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxArgs {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub depth: Option<f32>,
    pub width_segments: Option<u32>,
    pub height_segments: Option<u32>,
    pub depth_segments: Option<u32>,
}

impl BoxArgs {
    pub fn sized(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            depth: Some(depth),
            ..default()
        }
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(
            self.width.unwrap_or(1.0),
            self.height.unwrap_or(1.0),
            self.depth.unwrap_or(1.0),
        )
    }

    /// Face subdivisions along X, Y and Z, never below one.
    pub fn segments(&self) -> UVec3 {
        UVec3::new(
            self.width_segments.unwrap_or(1),
            self.height_segments.unwrap_or(1),
            self.depth_segments.unwrap_or(1),
        )
        .max(UVec3::ONE)
    }
}

/// Parameters of one animated mesh. Fixed for the lifetime of the mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    pub position: Vec3,
    pub dimensions: BoxArgs,
    pub colour: RgbColour,
}
