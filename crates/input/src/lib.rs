//! Input adapter: per-frame look and move input mapped to a camera orientation
//! and a movement intent for the character.
//!
//! # Invariants
//! - Camera pitch stays within the configured limit, whatever the input.
//! - Intent magnitude is the raw move-input length.
//! - Without a control transform nothing is updated.

pub mod action;
pub mod controller;

pub use action::{InputFrame, InputSource, ScriptedInput};
pub use controller::{
    ControllerConfig, MAX_CAMERA_PITCH, SimpleController, movement_intent, sync_camera_position,
};

pub fn crate_info() -> &'static str {
    "quickmove-input v0.1.0"
}
