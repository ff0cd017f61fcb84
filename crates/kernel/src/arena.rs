//! Static collision geometry for the reference host.
//!
//! Axis-aligned floor platforms and finite vertical wall planes. Enough to
//! exercise floors, ledges and climbable walls without a physics engine.

use glam::{Vec2, Vec3};
use quickmove_common::HorizontalExt;
use serde::{Deserialize, Serialize};

use crate::surface::{Capsule, Surface};

/// Height a body can step over. Walls whose top is below the feet plus this
/// height do not block, and floors this far above the feet still catch it.
pub const STEP_HEIGHT: f32 = 0.3;

/// Geometry queries a [`KinematicBody`](crate::KinematicBody) needs.
pub trait CollisionWorld {
    /// Highest floor at or below `origin`, no further than `max_distance` down.
    fn floor_below(&self, origin: Vec3, max_distance: f32) -> Option<Surface>;

    /// Nearest wall hit by a horizontal sweep from `origin` along `direction`.
    /// The swept region is `vertical_span` tall, centered on `origin`.
    fn cast_horizontal(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        vertical_span: f32,
    ) -> Option<Surface>;

    /// Push a capsule out of any wall it overlaps. Returns the corrected feet
    /// position.
    fn depenetrate(&self, feet: Vec3, capsule: &Capsule) -> Vec3;
}

/// Horizontal floor rectangle at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Minimum corner on the XZ plane.
    pub min: Vec2,
    /// Maximum corner on the XZ plane.
    pub max: Vec2,
    pub height: f32,
}

impl Platform {
    fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.z >= self.min.y && p.z <= self.max.y
    }
}

/// Vertical wall: a plane through `point` facing `normal`, bounded laterally by
/// `half_width` and vertically by `bottom..top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPlane {
    pub point: Vec3,
    pub normal: Vec3,
    pub half_width: f32,
    pub bottom: f32,
    pub top: f32,
}

impl WallPlane {
    pub fn new(point: Vec3, normal: Vec3, half_width: f32, bottom: f32, top: f32) -> Self {
        Self {
            point,
            normal: normal.xz_normalized(),
            half_width,
            bottom,
            top,
        }
    }

    fn tangent(&self) -> Vec3 {
        self.normal.cross(Vec3::Y)
    }

    fn overlaps_height(&self, low: f32, high: f32) -> bool {
        high >= self.bottom && low <= self.top
    }

    fn within_width(&self, p: Vec3) -> bool {
        (p - self.point).dot(self.tangent()).abs() <= self.half_width
    }

    /// Signed horizontal distance of `p` in front of the plane.
    fn distance(&self, p: Vec3) -> f32 {
        (p - self.point).xz().dot(self.normal)
    }
}

/// A small static level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Infinite ground plane height, if there is one.
    pub ground: Option<f32>,
    pub platforms: Vec<Platform>,
    pub walls: Vec<WallPlane>,
}

impl Arena {
    /// Flat infinite ground at height 0.
    pub fn flat() -> Self {
        Self {
            ground: Some(0.0),
            ..Default::default()
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    pub fn with_wall(mut self, wall: WallPlane) -> Self {
        self.walls.push(wall);
        self
    }
}

impl CollisionWorld for Arena {
    fn floor_below(&self, origin: Vec3, max_distance: f32) -> Option<Surface> {
        let ground = self.ground.into_iter();
        let platforms = self
            .platforms
            .iter()
            .filter(|p| p.contains(origin))
            .map(|p| p.height);

        ground
            .chain(platforms)
            .filter(|&h| h <= origin.y && origin.y - h <= max_distance)
            .max_by(|a, b| a.total_cmp(b))
            .map(|h| Surface::new(Vec3::new(origin.x, h, origin.z), Vec3::Y))
    }

    fn cast_horizontal(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        vertical_span: f32,
    ) -> Option<Surface> {
        let dir = direction.xz_normalized();
        if dir == Vec3::ZERO {
            return None;
        }
        let low = origin.y - vertical_span * 0.5;
        let high = origin.y + vertical_span * 0.5;

        self.walls
            .iter()
            .filter(|w| w.overlaps_height(low, high))
            .filter_map(|w| {
                let approach = dir.dot(w.normal);
                if approach >= -1e-4 {
                    return None;
                }
                let gap = w.distance(origin);
                if gap < 0.0 {
                    return None;
                }
                let t = gap / -approach;
                if t > max_distance {
                    return None;
                }
                let hit = origin + dir * t;
                w.within_width(hit).then(|| {
                    let y = origin.y.clamp(w.bottom, w.top);
                    (t, Surface::new(Vec3::new(hit.x, y, hit.z), w.normal))
                })
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, surface)| surface)
    }

    fn depenetrate(&self, feet: Vec3, capsule: &Capsule) -> Vec3 {
        let mut feet = feet;
        for wall in &self.walls {
            let low = feet.y + STEP_HEIGHT;
            if !wall.overlaps_height(low, feet.y + capsule.height) || !wall.within_width(feet) {
                continue;
            }
            let gap = wall.distance(feet);
            // Only walls approached from the front; bodies far behind are ignored.
            if gap < capsule.radius && gap > -capsule.radius {
                feet += wall.normal * (capsule.radius - gap);
            }
        }
        feet
    }
}
