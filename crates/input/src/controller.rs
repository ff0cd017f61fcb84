use glam::{Vec2, Vec3};
use quickmove_common::Transform;
use quickmove_kernel::config::{ConfigError, ensure_positive};
use quickmove_kernel::{InputIntent, MovementHost};
use serde::{Deserialize, Serialize};

use crate::action::InputFrame;

/// Pitch limit in degrees. Just short of vertical so yaw stays well defined.
pub const MAX_CAMERA_PITCH: f32 = 89.99;

/// Tuning for [`SimpleController`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Degrees of rotation per unit of look input.
    pub sensitivity: f32,
    /// Pitch limit in degrees, applied symmetrically.
    pub max_pitch: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            max_pitch: MAX_CAMERA_PITCH,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("sensitivity", self.sensitivity)?;
        ensure_positive("max_pitch", self.max_pitch)?;
        if self.max_pitch >= 90.0 {
            return Err(ConfigError::Invalid {
                field: "max_pitch",
                reason: format!("{} must stay below 90 degrees", self.max_pitch),
            });
        }
        Ok(())
    }
}

/// Turns per-frame look and move input into a camera orientation and a
/// movement intent for the character.
///
/// The control transform is optional; without one every update is skipped.
#[derive(Debug, Clone, Default)]
pub struct SimpleController {
    config: ControllerConfig,
    camera_pitch: f32,
}

impl SimpleController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            camera_pitch: 0.0,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Accumulated camera pitch in degrees. Positive looks down.
    pub fn pitch(&self) -> f32 {
        self.camera_pitch
    }

    /// Run the per-frame update: camera position, look, then movement.
    ///
    /// Returns the intent pushed to the host, or `None` when there is no
    /// control transform.
    pub fn update<H: MovementHost>(
        &mut self,
        frame: &InputFrame,
        control: Option<&mut Transform>,
        host: &mut H,
    ) -> Option<InputIntent> {
        let Some(control) = control else {
            tracing::trace!("no control transform, skipping input update");
            return None;
        };

        sync_camera_position(control, host);
        self.update_look(control, frame.look);

        let intent = movement_intent(control, frame.movement);
        host.add_movement_input(intent);
        Some(intent)
    }

    /// Apply a look delta to `control`.
    ///
    /// Pitch accumulates here and is clamped; yaw is read back from the
    /// transform so external turns are kept. The rotation is rebuilt from both
    /// every frame rather than composed onto the previous one.
    pub fn update_look(&mut self, control: &mut Transform, look: Vec2) {
        let input = look * self.config.sensitivity;
        let max = self.config.max_pitch;
        self.camera_pitch = (self.camera_pitch - input.y).clamp(-max, max);
        let yaw = control.yaw_degrees() + input.x;
        control.rotation = Transform::euler_degrees(self.camera_pitch, yaw);
    }
}

/// Park `control` at the top of the character's capsule.
pub fn sync_camera_position<H: MovementHost>(control: &mut Transform, host: &H) {
    control.position = host.top_center();
}

/// World-space movement intent for `movement` relative to `control`.
///
/// Forward is flattened onto the ground plane so looking up or down does not
/// slow the character. The magnitude is the raw input length, not the length
/// of the composed direction.
pub fn movement_intent(control: &Transform, movement: Vec2) -> InputIntent {
    let forward = flatten(control.forward());
    let right = control.right().normalize_or_zero();
    let direction = forward * movement.y + right * movement.x;
    InputIntent::new(direction, movement.length())
}

fn flatten(v: Vec3) -> Vec3 {
    (v - Vec3::Y * v.dot(Vec3::Y)).normalize_or_zero()
}
