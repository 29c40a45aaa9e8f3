//! Robot testing harness for the sliding root container
//!
//! A [`NavRobot`] owns a [`Runtime`] and a [`SlidingRootNav`] and drives both
//! from a simulated millisecond clock: pointer events carry the robot's time
//! and frames are drained in fixed 16ms steps, so gestures and settle
//! animations replay identically on every run.
//!
//! # Example
//!
//! ```
//! use slidenav::MenuState;
//! use slidenav_testing::NavRobot;
//!
//! let mut robot = NavRobot::launch(|builder| builder).expect("default setup");
//! robot.drag_and_hold((10.0, 300.0), (150.0, 300.0));
//! robot.release();
//! robot.wait_for_idle();
//! assert_eq!(robot.nav().menu_state(), MenuState::Open);
//! ```

use slidenav::{
    HostContext, MenuState, PointerRoute, SetupError, SlidingRootNav, SlidingRootNavBuilder,
    ViewNode,
};
use slidenav_core::Runtime;
use slidenav_foundation::{PointerEvent, PointerId};
use slidenav_ui_graphics::{Density, Point, Rect};

use crate::recorder::{ProgressRecorder, StateRecorder};

/// Window used by [`NavRobot::launch`].
pub const DEFAULT_WINDOW: Rect = Rect::new(0.0, 0.0, 360.0, 640.0);

/// Simulated frame interval.
pub const FRAME_MS: i64 = 16;

/// Upper bound for [`NavRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 1_000;

pub const CONTENT_TAG: &str = "content";
pub const MENU_TAG: &str = "menu";

/// Window content container holding a single content view.
pub fn window_with_content(bounds: Rect) -> ViewNode {
    ViewNode::new("window")
        .with_bounds(bounds)
        .with_child(ViewNode::new(CONTENT_TAG))
}

pub struct NavRobot {
    runtime: Runtime,
    nav: SlidingRootNav,
    time_ms: i64,
    pointer: PointerId,
    position: Point,
    pressed: bool,
}

impl NavRobot {
    /// Builds a container at baseline density in [`DEFAULT_WINDOW`] with a
    /// menu view already supplied; `configure` adds everything else.
    pub fn launch(
        configure: impl FnOnce(SlidingRootNavBuilder) -> SlidingRootNavBuilder,
    ) -> Result<Self, SetupError> {
        Self::launch_with_density(Density::BASELINE, configure)
    }

    pub fn launch_with_density(
        density: Density,
        configure: impl FnOnce(SlidingRootNavBuilder) -> SlidingRootNavBuilder,
    ) -> Result<Self, SetupError> {
        let runtime = Runtime::default();
        let host = HostContext::new(runtime.handle(), density, window_with_content(DEFAULT_WINDOW));
        let builder = SlidingRootNavBuilder::new(host).with_menu_view(ViewNode::new(MENU_TAG));
        let nav = configure(builder).inject()?;
        Ok(Self::new(runtime, nav))
    }

    pub fn new(runtime: Runtime, nav: SlidingRootNav) -> Self {
        Self {
            runtime,
            nav,
            time_ms: 0,
            pointer: 0,
            position: Point::ZERO,
            pressed: false,
        }
    }

    pub fn nav(&self) -> &SlidingRootNav {
        &self.nav
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn record_progress(&self) -> ProgressRecorder {
        let recorder = ProgressRecorder::new();
        self.nav.add_drag_listener(recorder.listener());
        recorder
    }

    pub fn record_states(&self) -> StateRecorder {
        let recorder = StateRecorder::new();
        self.nav.add_drag_state_listener(recorder.listener());
        recorder
    }

    /// Starts a new pointer at `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32) -> PointerRoute {
        self.pointer += 1;
        self.position = Point::new(x, y);
        self.pressed = true;
        log::trace!("robot press at ({x}, {y}) t={}ms", self.time_ms);
        self.send(PointerEvent::down(x, y, self.time_ms))
    }

    /// Moves the pressed pointer, one frame later.
    pub fn move_to(&mut self, x: f32, y: f32) -> PointerRoute {
        self.advance_frames(1);
        self.position = Point::new(x, y);
        self.send(PointerEvent::moved(x, y, self.time_ms))
    }

    /// Lifts the pointer where it is, at the current time.
    pub fn release(&mut self) -> PointerRoute {
        self.pressed = false;
        let Point { x, y } = self.position;
        self.send(PointerEvent::up(x, y, self.time_ms))
    }

    pub fn cancel(&mut self) -> PointerRoute {
        self.pressed = false;
        self.send(PointerEvent::cancel(self.time_ms))
    }

    pub fn tap(&mut self, x: f32, y: f32) -> PointerRoute {
        self.press(x, y);
        self.release()
    }

    /// Presses at `from` and moves to `to` in frame-sized steps, then holds
    /// still long enough for the release velocity to drop to zero.
    pub fn drag_and_hold(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.press(from.0, from.1);
        self.move_in_steps(from, to, 10);
        self.advance_time(100);
    }

    /// Presses at `from`, moves to `to` in three quick steps and releases.
    pub fn fling(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.press(from.0, from.1);
        self.move_in_steps(from, to, 3);
        self.release();
    }

    /// Full press, smooth drag, hold and release.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.drag_and_hold(from, to);
        self.release();
    }

    fn move_in_steps(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.move_to(x, y);
        }
    }

    fn send(&mut self, event: PointerEvent) -> PointerRoute {
        let event = event.with_id(self.pointer);
        self.nav.dispatch_pointer(&event)
    }

    /// Advances the clock by `frames` frames, draining callbacks each time.
    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.time_ms += FRAME_MS;
            self.runtime
                .drain_frame_callbacks(self.time_ms as u64 * 1_000_000);
        }
    }

    /// Advances the clock by at least `millis`, in whole frames.
    pub fn advance_time(&mut self, millis: i64) {
        let frames = (millis + FRAME_MS - 1) / FRAME_MS;
        self.advance_frames(frames.max(0) as usize);
    }

    /// Pumps frames until no animation is pending.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.runtime.has_frame_callbacks() {
                return;
            }
            self.advance_frames(1);
        }
        log::warn!("runtime still busy after {MAX_IDLE_FRAMES} frames");
    }

    /// Drives any settle to completion and returns the resting state.
    pub fn settle(&mut self) -> MenuState {
        self.wait_for_idle();
        self.nav.menu_state()
    }
}
