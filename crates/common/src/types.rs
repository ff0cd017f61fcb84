use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform: position and rotation.
///
/// Used for the control (camera) transform that the input adapter steers and
/// the medium resolver reads its facing from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Rotation composed from pitch (about X) and yaw (about Y), in degrees.
    /// Yaw is applied after pitch, so pitch never tilts the yaw axis.
    pub fn euler_degrees(pitch: f32, yaw: f32) -> Quat {
        Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), pitch.to_radians(), 0.0)
    }

    /// Local forward (+Z) in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Local right (+X) in world space.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Current yaw in degrees, read back from the rotation.
    ///
    /// Taken from the local right axis, which stays horizontal for any pitch
    /// without roll, so the value holds steady near straight up or down.
    pub fn yaw_degrees(&self) -> f32 {
        let right = self.right();
        (-right.z).atan2(right.x).to_degrees()
    }

    /// Current pitch in degrees. Positive pitch looks down.
    pub fn pitch_degrees(&self) -> f32 {
        let (_yaw, pitch, _roll) = self.rotation.to_euler(EulerRot::YXZ);
        pitch.to_degrees()
    }
}
