//! The capability interface between the character core and a physics body.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::gait::Gait;
use crate::jump::JumpRequest;
use crate::surface::{Capsule, Surface};

/// Movement intent for one frame: a world-space direction and the raw input
/// magnitude that scales it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputIntent {
    pub direction: Vec3,
    pub magnitude: f32,
}

impl InputIntent {
    pub fn new(direction: Vec3, magnitude: f32) -> Self {
        Self {
            direction,
            magnitude,
        }
    }

    pub fn is_active(&self) -> bool {
        self.magnitude > 0.01 && self.direction.length_squared() > 1e-6
    }
}

/// A physics body that the character core can query and drive.
///
/// The medium resolver and input adapter only talk to the body through this
/// trait. Implementors own velocity, gravity and collision; the core decides
/// which motion policy runs and with which parameters.
pub trait MovementHost {
    // -- queries --

    /// Floor under the body, if it is standing on one.
    fn floor(&self) -> Option<Surface>;

    fn capsule(&self) -> Capsule;

    fn velocity(&self) -> Vec3;

    /// Direction of the most recent movement intent.
    fn world_input(&self) -> Vec3;

    fn has_movement_input(&self) -> bool;

    /// Top of the capsule in world space. Cameras are parked here.
    fn top_center(&self) -> Vec3;

    /// Jumps performed since the body last stood on the floor.
    fn jump_count(&self) -> u32;

    fn is_on_floor(&self) -> bool {
        self.floor().is_some()
    }

    // -- probes --

    /// Cast horizontally from the capsule center along `direction`.
    ///
    /// `max_distance` is measured beyond the capsule radius, `vertical_span`
    /// is the height of the swept region and `origin_offset` raises the
    /// probe origin.
    fn find_wall(
        &self,
        direction: Vec3,
        max_distance: f32,
        vertical_span: f32,
        origin_offset: f32,
    ) -> Option<Surface>;

    // -- motion --

    fn apply_floor_movement(&mut self, gait: &Gait);

    /// Gravity with separate strengths for falling and rising.
    fn apply_gravity(&mut self, descending: f32, ascending: f32);

    /// Steer horizontal velocity toward the input direction.
    fn apply_air_control(&mut self, strength: f32);

    /// Accelerate along the input direction.
    fn apply_air_movement(&mut self, acceleration: f32);

    fn apply_drag(&mut self, coefficient: f32);

    /// Pull the body toward `surface`.
    fn apply_surface_pull(&mut self, strength: f32, surface: &Surface);

    fn apply_wall_climb(&mut self, gait: &Gait, surface: &Surface);

    // -- commands --

    /// Attempt a jump. Returns whether the impulse was applied.
    fn jump(&mut self, request: &JumpRequest) -> bool;

    fn add_movement_input(&mut self, intent: InputIntent);
}
