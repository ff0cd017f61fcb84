//! Jump arbitration: double jumps and coyote time.

use serde::{Deserialize, Serialize};

/// Parameters of a single jump attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpRequest {
    /// Upward velocity change applied on success (m/s).
    pub impulse: f32,
    /// Maximum jumps before landing again.
    pub max_jumps: u32,
    /// Allow jumps while airborne (second and later jumps).
    pub ignore_ground_check: bool,
    /// Seconds after leaving the floor during which a ground jump still counts.
    pub coyote_time: f32,
}

/// Tracks how many jumps were made since the last landing and how long the
/// body has been airborne.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    count: u32,
    airborne_time: f32,
}

impl JumpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jumps made since the last landing.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn airborne_time(&self) -> f32 {
        self.airborne_time
    }

    /// Advance timers after a physics step.
    pub fn tick(&mut self, dt: f32, grounded: bool) {
        if grounded {
            self.count = 0;
            self.airborne_time = 0.0;
        } else {
            self.airborne_time += dt;
        }
    }

    /// Decide whether a jump is allowed right now and record it.
    ///
    /// A ground jump is allowed on the floor or within the coyote window, as
    /// long as no jump was made since leaving the floor. Every other jump is an
    /// air jump: it needs `ignore_ground_check`, and walking off a ledge
    /// forfeits the ground jump's slot.
    pub fn try_jump(&mut self, request: &JumpRequest, grounded: bool) -> bool {
        if request.max_jumps == 0 {
            return false;
        }

        let in_coyote = grounded || self.airborne_time <= request.coyote_time;
        if in_coyote && self.count == 0 {
            self.count = 1;
            self.airborne_time = 0.0;
            return true;
        }

        if !request.ignore_ground_check {
            return false;
        }

        let next = self.count.max(1) + 1;
        if next > request.max_jumps {
            return false;
        }
        self.count = next;
        true
    }
}
