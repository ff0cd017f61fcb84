use serde::{Deserialize, Serialize};

/// Movement tuning consumed by a host when it applies floor or wall-climb
/// movement. The resolver only passes it through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gait {
    /// Target speed at full input (m/s).
    pub speed: f32,
    /// Rate of approaching the target velocity while there is input (m/s²).
    pub acceleration: f32,
    /// Rate of slowing down without input (m/s²).
    pub deceleration: f32,
}

impl Default for Gait {
    fn default() -> Self {
        Self {
            speed: 6.0,
            acceleration: 60.0,
            deceleration: 40.0,
        }
    }
}

impl Gait {
    /// Default tuning for climbing walls.
    pub fn wall_climb() -> Self {
        Self {
            speed: 3.0,
            acceleration: 30.0,
            deceleration: 30.0,
        }
    }
}
