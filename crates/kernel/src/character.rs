use glam::Vec3;
use quickmove_common::{HorizontalExt, map_clamped};
use serde::{Deserialize, Serialize};

use crate::config::CharacterConfig;
use crate::host::MovementHost;
use crate::jump::JumpRequest;
use crate::medium::MoveMedium;
use crate::surface::Surface;

/// An event record produced by the character core.
///
/// Presentation layers consume these instead of being called from inside the
/// simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CharacterEvent {
    /// The resolved medium differs from the previous tick's.
    MediumChanged {
        tick: u64,
        old: MoveMedium,
        new: MoveMedium,
    },
    /// A jump was performed; `count` is the number of jumps since landing.
    Jumped { tick: u64, count: u32 },
    /// A jump was requested but refused.
    JumpRejected { tick: u64, count: u32 },
}

/// Per-frame locomotion parameters for animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Locomotion {
    pub running: bool,
    /// Speed relative to the ground gait, in `[0, 1]`.
    pub run_speed: f32,
}

/// Character that moves on the ground, in the air and up walls.
///
/// Each physics tick it runs the motion policy of its current medium on the
/// host, then resolves the medium for the next tick. Ground wins over wall and
/// wall wins over air.
#[derive(Debug, Clone)]
pub struct AdvancedCharacter {
    config: CharacterConfig,
    medium: MoveMedium,
    wall_surface: Option<Surface>,
    tick: u64,
    /// Append-only log, drained by presentation.
    event_log: Vec<CharacterEvent>,
}

impl AdvancedCharacter {
    pub fn new(config: CharacterConfig) -> Self {
        Self {
            config,
            medium: MoveMedium::default(),
            wall_surface: None,
            tick: 0,
            event_log: Vec::new(),
        }
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn medium(&self) -> MoveMedium {
        self.medium
    }

    /// Wall the character is currently climbing, if any.
    pub fn wall_surface(&self) -> Option<Surface> {
        self.wall_surface
    }

    /// Physics ticks run so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn events(&self) -> &[CharacterEvent] {
        &self.event_log
    }

    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Run one physics tick and return the medium for the next one.
    ///
    /// `control_forward` is the facing of the control (camera) transform, used
    /// to decide whether a wall in front of the character is climbable.
    pub fn physics_update<H: MovementHost>(
        &mut self,
        host: &mut H,
        control_forward: Vec3,
    ) -> MoveMedium {
        self.tick += 1;
        self.apply_motion(host);

        let next = self.find_next_medium(host, control_forward);
        if next != self.medium {
            let old = self.medium;
            self.medium = next;
            tracing::debug!(tick = self.tick, %old, new = %next, "medium changed");
            self.event_log.push(CharacterEvent::MediumChanged {
                tick: self.tick,
                old,
                new: next,
            });
        }
        tracing::trace!(tick = self.tick, medium = %self.medium, "physics tick");
        self.medium
    }

    fn apply_motion<H: MovementHost>(&self, host: &mut H) {
        let c = &self.config;
        match self.medium {
            MoveMedium::Ground => host.apply_floor_movement(&c.gait),
            MoveMedium::Air => {
                host.apply_gravity(c.descending_gravity, c.ascending_gravity);
                host.apply_air_control(c.air_control);
                let horizontal_speed = host.velocity().xz().length();
                host.apply_air_movement(air_boost(
                    horizontal_speed,
                    c.air_accel_boost_threshold,
                    c.air_acceleration,
                ));
                host.apply_drag(c.drag);
            }
            MoveMedium::Wall => {
                if let Some(wall) = self.wall_surface {
                    host.apply_surface_pull(c.wall_pull, &wall);
                    host.apply_wall_climb(&c.wall_climb_gait, &wall);
                }
            }
        }
    }

    fn find_next_medium<H: MovementHost>(&mut self, host: &H, control_forward: Vec3) -> MoveMedium {
        let capsule = host.capsule();
        self.wall_surface = host
            .find_wall(
                host.world_input(),
                self.config.wall_check_length,
                capsule.wall_probe_span(),
                0.0,
            )
            .filter(|wall| wall.facing(control_forward) > self.config.climb_or_run_dot_threshold);

        resolve_medium(host.is_on_floor(), self.wall_surface.is_some())
    }

    /// Request a jump from the host. Returns whether it happened.
    pub fn on_jump<H: MovementHost>(&mut self, host: &mut H) -> bool {
        let request = JumpRequest {
            impulse: self.config.jump_force,
            max_jumps: self.config.max_jumps,
            ignore_ground_check: true,
            coyote_time: self.config.coyote_time,
        };
        let jumped = host.jump(&request);
        let count = host.jump_count();
        if jumped {
            tracing::debug!(tick = self.tick, count, "jumped");
            self.event_log.push(CharacterEvent::Jumped {
                tick: self.tick,
                count,
            });
        } else {
            tracing::debug!(tick = self.tick, count, "jump refused");
            self.event_log.push(CharacterEvent::JumpRejected {
                tick: self.tick,
                count,
            });
        }
        jumped
    }

    /// Locomotion parameters for the current frame.
    pub fn locomotion<H: MovementHost>(&self, host: &H) -> Locomotion {
        Locomotion {
            running: host.has_movement_input() && host.is_on_floor(),
            run_speed: map_clamped(host.velocity().length(), 0.0, self.config.gait.speed, 0.0, 1.0),
        }
    }
}

/// Medium precedence: ground, then wall, then air.
pub fn resolve_medium(floor_valid: bool, wall_valid: bool) -> MoveMedium {
    if floor_valid {
        MoveMedium::Ground
    } else if wall_valid {
        MoveMedium::Wall
    } else {
        MoveMedium::Air
    }
}

/// Extra air acceleration for slow characters: full `air_acceleration` when
/// standing still, fading to zero at `threshold` and above.
pub fn air_boost(horizontal_speed: f32, threshold: f32, air_acceleration: f32) -> f32 {
    map_clamped(horizontal_speed, threshold, 0.0, 0.0, air_acceleration)
}
