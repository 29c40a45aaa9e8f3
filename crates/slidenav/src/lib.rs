//! Sliding root navigation for Slidenav.
//!
//! A [`SlidingRootNav`] stacks a menu view under the app's content view and
//! lets the user drag the content aside to reveal it. As the content slides,
//! a [`RootTransformation`] reshapes it (scaled down and lifted by default),
//! listeners observe progress and state, and a click consumer keeps touches
//! away from whatever is not meant to receive them.
//!
//! ```no_run
//! use slidenav::{HostContext, SlidingRootNavBuilder, ViewNode};
//! use slidenav_core::Runtime;
//! use slidenav_ui_graphics::{Density, Rect};
//!
//! let runtime = Runtime::default();
//! let window = ViewNode::new("window")
//!     .with_bounds(Rect::new(0.0, 0.0, 360.0, 640.0))
//!     .with_child(ViewNode::new("content"));
//! let nav = SlidingRootNavBuilder::new(HostContext::new(runtime.handle(), Density(2.0), window))
//!     .with_menu_view(ViewNode::new("menu"))
//!     .with_root_view_scale(0.7)
//!     .inject()
//!     .expect("window holds exactly one content view");
//! nav.open_menu(true);
//! ```

mod builder;
mod click_consumer;
mod config;
mod drag;
mod error;
mod gravity;
mod layout;
mod listeners;
mod saved_state;
mod state;
mod toggle;
mod view;

pub mod transform;

pub use builder::{HostContext, SlidingRootNavBuilder};
pub use click_consumer::{ClickConsumer, PointerRoute};
pub use config::{NavConfig, DEFAULT_DRAG_DISTANCE_DP, DEFAULT_END_ELEVATION_DP, DEFAULT_END_SCALE};
pub use drag::{
    settle_duration_millis, settle_target, DragController, DragEffect, DragEffects, GesturePhase,
    SettleRequest, BASE_SETTLE_DURATION_MS, MAX_SETTLE_DURATION_MS,
};
pub use error::SetupError;
pub use gravity::SlideGravity;
pub use layout::{SlidingRootNav, CLICK_CONSUMER_TAG};
pub use listeners::{DragListeners, DragStateListeners, ListenerId, ListenerRegistry};
pub use saved_state::{SavedState, SavedValue, MENU_OPENED_KEY};
pub use state::MenuState;
pub use toggle::{DrawerLockMode, MenuIndicator, MenuToggleAdapter};
pub use transform::{
    CompositeTransformation, ElevationTransformation, RootTransformation, ScaleTransformation,
    YTranslationTransformation,
};
pub use view::{ViewId, ViewNode};

pub mod prelude {
    pub use crate::builder::{HostContext, SlidingRootNavBuilder};
    pub use crate::layout::SlidingRootNav;
    pub use crate::state::MenuState;
    pub use crate::toggle::{MenuIndicator, MenuToggleAdapter};
    pub use crate::transform::RootTransformation;
    pub use crate::SlideGravity;
}
