//! Character movement kernel: movement media, medium resolution, jump
//! arbitration and the host abstraction the character drives.
//!
//! # Invariants
//! - The medium is always exactly one of ground, air or wall.
//! - Ground takes precedence over wall, and wall over air.
//! - Entering the wall medium requires a wall the control transform faces.
//! - Nothing in a physics tick is an error: "no surface" resolves to air.

pub mod arena;
pub mod body;
pub mod character;
pub mod config;
pub mod gait;
pub mod host;
pub mod jump;
pub mod medium;
pub mod surface;

pub use arena::{Arena, CollisionWorld, Platform, STEP_HEIGHT, WallPlane};
pub use body::KinematicBody;
pub use character::{AdvancedCharacter, CharacterEvent, Locomotion, air_boost, resolve_medium};
pub use config::{CharacterConfig, ConfigError, load_config};
pub use gait::Gait;
pub use host::{InputIntent, MovementHost};
pub use jump::{JumpRequest, JumpState};
pub use medium::MoveMedium;
pub use surface::{Capsule, Surface};

pub fn crate_info() -> &'static str {
    "quickmove-kernel v0.1.0"
}
