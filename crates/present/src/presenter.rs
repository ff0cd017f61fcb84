use quickmove_kernel::{CharacterEvent, Locomotion, MoveMedium};

use crate::animator::Animator;

/// Animator parameter names.
pub mod params {
    pub const JUMP: &str = "Jump";
    pub const DOUBLE_JUMP: &str = "DoubleJump";
    pub const LAND: &str = "Land";
    pub const RUNNING: &str = "Running";
    pub const RUN_SPEED: &str = "RunSpeed";
}

/// Maps character events and locomotion onto animator parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterPresenter;

impl CharacterPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Apply every event in order.
    pub fn present<A: Animator>(&self, events: &[CharacterEvent], animator: &mut A) {
        for event in events {
            self.apply(event, animator);
        }
    }

    pub fn apply<A: Animator>(&self, event: &CharacterEvent, animator: &mut A) {
        match *event {
            CharacterEvent::MediumChanged { old, new, .. } => {
                self.on_medium_change(old, new, animator)
            }
            CharacterEvent::Jumped { count, .. } => self.on_jump(count, animator),
            CharacterEvent::JumpRejected { .. } => {}
        }
    }

    /// Landing clears pending jump triggers; any other change clears `Land`.
    pub fn on_medium_change<A: Animator>(&self, old: MoveMedium, new: MoveMedium, animator: &mut A) {
        if MoveMedium::did_change_to(old, new, MoveMedium::Ground) {
            tracing::trace!(%old, "land");
            animator.reset_trigger(params::JUMP);
            animator.reset_trigger(params::DOUBLE_JUMP);
            animator.set_trigger(params::LAND);
        } else {
            animator.reset_trigger(params::LAND);
        }
    }

    /// First jump fires `Jump`; later ones swap it for `DoubleJump`.
    pub fn on_jump<A: Animator>(&self, count: u32, animator: &mut A) {
        if count == 1 {
            animator.set_trigger(params::JUMP);
        } else {
            animator.reset_trigger(params::JUMP);
            animator.set_trigger(params::DOUBLE_JUMP);
        }
    }

    pub fn locomotion<A: Animator>(&self, locomotion: &Locomotion, animator: &mut A) {
        animator.set_bool(params::RUNNING, locomotion.running);
        animator.set_float(params::RUN_SPEED, locomotion.run_speed);
    }
}
