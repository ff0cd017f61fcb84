//! Presentation adapter: character events mapped onto animator parameters.
//!
//! # Invariants
//! - Presentation never mutates simulation state.
//! - Animator parameters derive only from character events and locomotion.
//!
//! The [`Animator`] trait is the only seam to an animation system. A
//! [`RecordingAnimator`] backs the CLI and tests; an engine binding implements
//! the same trait without changing [`CharacterPresenter`].

pub mod animator;
pub mod presenter;

pub use animator::{AnimCall, AnimValue, Animator, RecordingAnimator};
pub use presenter::{CharacterPresenter, params};

pub fn crate_info() -> &'static str {
    "quickmove-present v0.1.0"
}
