//! Testing utilities and harness for Slidenav

pub mod recorder;
pub mod robot;
pub mod robot_assertions;

pub use recorder::{ProgressRecorder, Recorder, StateRecorder};
pub use robot::*;

pub mod prelude {
    pub use crate::recorder::{ProgressRecorder, Recorder, StateRecorder};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
