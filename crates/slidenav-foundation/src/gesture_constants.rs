//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are expressed in dp and converted with an explicit [`Density`], so
//! the same recogniser behaves alike on low and high density screens.

use slidenav_ui_graphics::Density;

/// Drag threshold in dp.
///
/// Movement along the drag axis must exceed this distance from the press
/// position before a drag starts. Matches the common 8dp platform touch slop.
pub const DRAG_THRESHOLD_DP: f32 = 8.0;

/// Release velocity in dp/s above which a release counts as a fling.
pub const MIN_FLING_VELOCITY_DP: f32 = 400.0;

/// Maximum fling velocity in dp/s; faster releases are clamped.
pub const MAX_FLING_VELOCITY_DP: f32 = 8_000.0;

/// Gesture thresholds resolved to pixels for one display density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
}

impl GestureConfig {
    pub fn for_density(density: Density) -> Self {
        Self {
            touch_slop: density.dp_to_px(DRAG_THRESHOLD_DP),
            min_fling_velocity: density.dp_to_px(MIN_FLING_VELOCITY_DP),
            max_fling_velocity: density.dp_to_px(MAX_FLING_VELOCITY_DP),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::for_density(Density::BASELINE)
    }
}
