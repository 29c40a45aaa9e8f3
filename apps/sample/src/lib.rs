//! Headless Slidenav sample: a menu of screens behind a sliding content view.

mod app;
pub mod screens;

pub use app::{SampleApp, ToolbarIcon, WINDOW};
pub use screens::Screen;
