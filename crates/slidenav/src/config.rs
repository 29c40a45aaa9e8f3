use slidenav_animation::Easing;
use slidenav_foundation::GestureConfig;
use slidenav_ui_graphics::Density;

use crate::SlideGravity;

pub const DEFAULT_END_SCALE: f32 = 0.65;
pub const DEFAULT_END_ELEVATION_DP: i32 = 8;
pub const DEFAULT_DRAG_DISTANCE_DP: i32 = 180;

/// Snapshot of the container's behaviour, resolved to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    /// Content travel in px between closed and open.
    pub max_drag_distance: f32,
    pub gravity: SlideGravity,
    pub locked: bool,
    pub content_clickable_when_open: bool,
    pub gestures: GestureConfig,
    pub settle_easing: Easing,
}

impl NavConfig {
    pub fn for_density(density: Density) -> Self {
        Self {
            max_drag_distance: density.round_dp_to_px(DEFAULT_DRAG_DISTANCE_DP) as f32,
            gravity: SlideGravity::Left,
            locked: false,
            content_clickable_when_open: true,
            gestures: GestureConfig::for_density(density),
            settle_easing: Easing::LinearOutSlowIn,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::for_density(Density::BASELINE)
    }
}

/// Drag distances below one pixel would divide progress by ~0.
pub(crate) fn sanitize_drag_distance(px: f32) -> f32 {
    if px.is_finite() && px >= 1.0 {
        px
    } else {
        log::warn!("max drag distance {px} is not usable, falling back to 1px");
        1.0
    }
}
