//! Shared types and math for the quickmove character core.
//!
//! # Conventions
//! - `+Y` is up, `+Z` is forward and `+X` is right for an unrotated transform.
//! - Angles in configuration and on the camera are degrees.

pub mod math;
pub mod types;

pub use math::{HorizontalExt, map_clamped, move_towards};
pub use types::Transform;

pub fn crate_info() -> &'static str {
    "quickmove-common v0.1.0"
}
