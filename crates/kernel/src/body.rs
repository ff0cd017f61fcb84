//! Reference movement host: a small kinematic integrator over a
//! [`CollisionWorld`].

use glam::Vec3;
use quickmove_common::{HorizontalExt, move_towards};

use crate::arena::{CollisionWorld, STEP_HEIGHT};
use crate::gait::Gait;
use crate::host::{InputIntent, MovementHost};
use crate::jump::{JumpRequest, JumpState};
use crate::surface::{Capsule, Surface};

/// How far below the feet a floor still counts as touched.
const SNAP_DOWN: f32 = 0.05;

/// Kinematic capsule body driven through [`MovementHost`].
///
/// Motion calls change the velocity using the fixed time step; [`integrate`]
/// then moves the body and refreshes floor contact.
///
/// [`integrate`]: KinematicBody::integrate
#[derive(Debug, Clone)]
pub struct KinematicBody<W> {
    world: W,
    capsule: Capsule,
    /// Feet position in world space.
    position: Vec3,
    velocity: Vec3,
    floor: Option<Surface>,
    jump: JumpState,
    intent: InputIntent,
    fixed_dt: f32,
}

impl<W: CollisionWorld> KinematicBody<W> {
    pub fn new(world: W, capsule: Capsule, position: Vec3, fixed_dt: f32) -> Self {
        let mut body = Self {
            world,
            capsule,
            position,
            velocity: Vec3::ZERO,
            floor: None,
            jump: JumpState::new(),
            intent: InputIntent::default(),
            fixed_dt,
        };
        body.refresh_floor();
        body
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn intent(&self) -> InputIntent {
        self.intent
    }

    pub fn jump_state(&self) -> &JumpState {
        &self.jump
    }

    /// Advance the body by one fixed step.
    pub fn integrate(&mut self) {
        let dt = self.fixed_dt;
        self.position += self.velocity * dt;

        let corrected = self.world.depenetrate(self.position, &self.capsule);
        let push = corrected - self.position;
        if push.length_squared() > 0.0 {
            // Cancel the velocity component driving into the wall.
            let n = push.normalize();
            let into = self.velocity.dot(n);
            if into < 0.0 {
                self.velocity -= n * into;
            }
            self.position = corrected;
        }

        self.refresh_floor();
        if let Some(floor) = self.floor {
            self.position.y = floor.point.y;
            self.velocity.y = self.velocity.y.max(0.0);
        }
        self.jump.tick(dt, self.floor.is_some());
    }

    fn refresh_floor(&mut self) {
        // Rising bodies are never grounded; this lets a jump leave the floor.
        if self.velocity.y > 0.0 {
            self.floor = None;
            return;
        }
        let origin = self.position + Vec3::Y * STEP_HEIGHT;
        self.floor = self.world.floor_below(origin, STEP_HEIGHT + SNAP_DOWN);
    }

    /// Normalized horizontal wish direction and its strength in `[0, 1]`.
    fn wish(&self) -> (Vec3, f32) {
        if !self.intent.is_active() {
            return (Vec3::ZERO, 0.0);
        }
        (
            self.intent.direction.xz_normalized(),
            self.intent.magnitude.clamp(0.0, 1.0),
        )
    }
}

impl<W: CollisionWorld> MovementHost for KinematicBody<W> {
    fn floor(&self) -> Option<Surface> {
        self.floor
    }

    fn capsule(&self) -> Capsule {
        self.capsule
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn world_input(&self) -> Vec3 {
        self.intent.direction
    }

    fn has_movement_input(&self) -> bool {
        self.intent.is_active()
    }

    fn top_center(&self) -> Vec3 {
        self.capsule.top_center(self.position)
    }

    fn jump_count(&self) -> u32 {
        self.jump.count()
    }

    fn find_wall(
        &self,
        direction: Vec3,
        max_distance: f32,
        vertical_span: f32,
        origin_offset: f32,
    ) -> Option<Surface> {
        let origin = self.capsule.center(self.position) + Vec3::Y * origin_offset;
        self.world.cast_horizontal(
            origin,
            direction,
            self.capsule.radius + max_distance,
            vertical_span,
        )
    }

    fn apply_floor_movement(&mut self, gait: &Gait) {
        let (dir, strength) = self.wish();
        let target = dir * gait.speed * strength;
        let rate = if strength > 0.0 {
            gait.acceleration
        } else {
            gait.deceleration
        };
        let horizontal = move_towards(self.velocity.xz(), target, rate * self.fixed_dt);
        self.velocity = Vec3::new(horizontal.x, self.velocity.y, horizontal.z);
    }

    fn apply_gravity(&mut self, descending: f32, ascending: f32) {
        let g = if self.velocity.y > 0.0 {
            ascending
        } else {
            descending
        };
        self.velocity.y -= g * self.fixed_dt;
    }

    fn apply_air_control(&mut self, strength: f32) {
        let (dir, input) = self.wish();
        if input <= 0.0 {
            return;
        }
        let horizontal = self.velocity.xz();
        let steered = dir * horizontal.length();
        let t = (strength * input * self.fixed_dt).clamp(0.0, 1.0);
        let horizontal = horizontal.lerp(steered, t);
        self.velocity = Vec3::new(horizontal.x, self.velocity.y, horizontal.z);
    }

    fn apply_air_movement(&mut self, acceleration: f32) {
        let (dir, input) = self.wish();
        self.velocity += dir * acceleration * input * self.fixed_dt;
    }

    fn apply_drag(&mut self, coefficient: f32) {
        let keep = (1.0 - coefficient * self.fixed_dt).max(0.0);
        self.velocity.x *= keep;
        self.velocity.z *= keep;
    }

    fn apply_surface_pull(&mut self, strength: f32, surface: &Surface) {
        self.velocity -= surface.horizontal_normal() * strength * self.fixed_dt;
    }

    fn apply_wall_climb(&mut self, gait: &Gait, surface: &Surface) {
        let n = surface.horizontal_normal();
        let (dir, input) = self.wish();

        // Pushing into the wall climbs; sideways input runs along it.
        let into = dir.dot(-n).max(0.0) * input;
        let along = (dir - n * dir.dot(n)) * input;
        let target = Vec3::Y * gait.speed * into + along * gait.speed;

        let normal_part = n * self.velocity.dot(n);
        let tangential = self.velocity - normal_part;
        let rate = if input > 0.0 {
            gait.acceleration
        } else {
            gait.deceleration
        };
        self.velocity = move_towards(tangential, target, rate * self.fixed_dt) + normal_part;
    }

    fn jump(&mut self, request: &JumpRequest) -> bool {
        if !self.jump.try_jump(request, self.floor.is_some()) {
            return false;
        }
        self.velocity.y = self.velocity.y.max(0.0) + request.impulse;
        self.floor = None;
        true
    }

    fn add_movement_input(&mut self, intent: InputIntent) {
        self.intent = intent;
    }
}
