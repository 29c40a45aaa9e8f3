use std::fmt;

/// Fatal configuration mistakes reported by
/// [`SlidingRootNavBuilder::inject`](crate::SlidingRootNavBuilder::inject).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The content container must hold exactly one view to slide.
    BadContentView { child_count: usize },
    /// Neither a menu view nor a menu layout was supplied.
    NoMenuView,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::BadContentView { child_count } => write!(
                f,
                "content view must contain exactly one child view, found {child_count}"
            ),
            SetupError::NoMenuView => {
                write!(f, "no menu view or menu layout was supplied to the builder")
            }
        }
    }
}

impl std::error::Error for SetupError {}
