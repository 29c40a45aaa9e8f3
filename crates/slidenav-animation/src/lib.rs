//! Animation system for Slidenav
//!
//! Provides time-based tweens over the runtime's frame clock.

mod animatable;
mod easing;

pub use animatable::{Animatable, AnimationStatus};
pub use easing::{AnimationSpec, Easing};
