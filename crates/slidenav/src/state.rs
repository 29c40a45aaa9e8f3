/// Discrete visual state of the menu.
///
/// `Dragging` covers both live finger drags and the settle animation that
/// follows a release or a programmatic open/close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Dragging,
    Open,
}

impl MenuState {
    /// Drag progress of the resting position for `Open`/`Closed`.
    pub fn boundary_progress(&self) -> Option<f32> {
        match self {
            MenuState::Closed => Some(0.0),
            MenuState::Open => Some(1.0),
            MenuState::Dragging => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        !matches!(self, MenuState::Dragging)
    }
}
