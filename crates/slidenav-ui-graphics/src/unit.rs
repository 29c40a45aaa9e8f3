//! Unit types: Dp, Px, Density and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: Density) -> f32 {
        self.0 * density.0
    }

    pub fn from_px(px: f32, density: Density) -> Self {
        Self(px / density.0)
    }
}

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

/// Display density: physical pixels per density-independent pixel.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(pub f32);

impl Density {
    pub const BASELINE: Density = Density(1.0);

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        Dp(dp).to_px(*self)
    }

    /// Converts whole dp into whole pixels, rounding half away from zero.
    pub fn round_dp_to_px(&self, dp: i32) -> i32 {
        (self.0 * dp as f32).round() as i32
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}
