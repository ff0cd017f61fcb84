//! Probe results and capsule geometry.

use glam::Vec3;
use quickmove_common::HorizontalExt;
use serde::{Deserialize, Serialize};

/// A surface found by a floor or wall probe.
///
/// Probes return `Option<Surface>`; `None` means nothing was hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Contact point in world space.
    pub point: Vec3,
    /// Unit normal pointing away from the surface.
    pub normal: Vec3,
}

impl Surface {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Normal projected onto the horizontal plane and normalized.
    pub fn horizontal_normal(&self) -> Vec3 {
        self.normal.xz_normalized()
    }

    /// How squarely `forward` faces into this surface, on the horizontal plane.
    /// 1.0 means head-on; values at or below zero mean facing away.
    pub fn facing(&self, forward: Vec3) -> f32 {
        forward.xz_normalized().dot(-self.horizontal_normal())
    }
}

/// Upright capsule collider, measured from the feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capsule {
    pub height: f32,
    pub radius: f32,
}

impl Default for Capsule {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
        }
    }
}

impl Capsule {
    /// Vertical extent of the cylindrical section, used as the wall probe span.
    pub fn wall_probe_span(&self) -> f32 {
        (self.height - self.radius * 2.0).max(0.0)
    }

    pub fn center(&self, feet: Vec3) -> Vec3 {
        feet + Vec3::Y * (self.height * 0.5)
    }

    pub fn top_center(&self, feet: Vec3) -> Vec3 {
        feet + Vec3::Y * self.height
    }
}
