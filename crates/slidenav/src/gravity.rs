/// Screen edge the menu is revealed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlideGravity {
    /// Menu on the left; content slides right to open.
    #[default]
    Left,
    /// Menu on the right; content slides left to open.
    Right,
}

impl SlideGravity {
    /// +1 when opening moves content towards positive x, -1 otherwise.
    pub fn direction(&self) -> f32 {
        match self {
            SlideGravity::Left => 1.0,
            SlideGravity::Right => -1.0,
        }
    }

    /// Converts a horizontal pointer delta into a delta along the opening direction.
    pub fn opening_delta(&self, dx: f32) -> f32 {
        dx * self.direction()
    }

    /// Horizontal translation of the content view at `progress`.
    pub fn content_offset(&self, progress: f32, max_drag_distance: f32) -> f32 {
        self.direction() * progress * max_drag_distance
    }
}
