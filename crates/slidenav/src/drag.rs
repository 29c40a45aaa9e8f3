//! Drag state machine for the sliding content view.
//!
//! [`DragController`] turns pointer input into drag progress and menu state.
//! It never touches views or listeners itself; every call returns the
//! [`DragEffect`]s the container has to apply, in order.

use smallvec::SmallVec;

use slidenav_foundation::{GestureConfig, PointerEvent, PointerId, VelocityTracker1D};
use slidenav_ui_graphics::Point;

use crate::config::sanitize_drag_distance;
use crate::{MenuState, SlideGravity};

/// Settle duration used when no release velocity is available, per full drag.
pub const BASE_SETTLE_DURATION_MS: f32 = 256.0;

/// Upper bound for every settle animation.
pub const MAX_SETTLE_DURATION_MS: f32 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEffect {
    /// Drag progress changed to the given value.
    Progress(f32),
    /// Menu state changed to the given value.
    State(MenuState),
    /// The gesture ended; animate to the given resting state.
    Settle(SettleRequest),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleRequest {
    pub target: MenuState,
    /// Release velocity in px/s, positive towards open.
    pub velocity: f32,
}

pub type DragEffects = SmallVec<[DragEffect; 3]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pressed, still inside the touch slop.
    Pending,
    /// Captured: movement drives progress.
    Dragging,
    /// Moved the wrong way; ignored until release.
    Rejected,
}

#[derive(Clone, Copy, Debug)]
struct ActiveGesture {
    pointer: PointerId,
    origin: Point,
    start_progress: f32,
    phase: GesturePhase,
}

/// Decides where a released drag comes to rest.
///
/// A fling in either direction wins; otherwise the menu opens only when
/// strictly more than half open, so exactly 0.5 closes.
pub fn settle_target(progress: f32, velocity: f32, min_fling_velocity: f32) -> MenuState {
    if velocity > min_fling_velocity {
        MenuState::Open
    } else if velocity < -min_fling_velocity {
        MenuState::Closed
    } else if progress > 0.5 {
        MenuState::Open
    } else {
        MenuState::Closed
    }
}

/// Duration of a settle covering `distance` px.
///
/// Velocity only speeds things up when it points the way the settle travels.
pub fn settle_duration_millis(distance: f32, velocity: f32, max_drag_distance: f32) -> u64 {
    if distance == 0.0 {
        return 0;
    }
    let towards_target = velocity != 0.0 && velocity.signum() == distance.signum();
    let millis = if towards_target {
        4.0 * (1000.0 * (distance / velocity).abs()).round()
    } else {
        (distance.abs() / max_drag_distance.max(1.0) + 1.0) * BASE_SETTLE_DURATION_MS
    };
    millis.min(MAX_SETTLE_DURATION_MS) as u64
}

pub struct DragController {
    gravity: SlideGravity,
    max_drag_distance: f32,
    gestures: GestureConfig,
    locked: bool,
    progress: f32,
    state: MenuState,
    gesture: Option<ActiveGesture>,
    velocity: VelocityTracker1D,
}

impl DragController {
    pub fn new(gravity: SlideGravity, max_drag_distance: f32, gestures: GestureConfig) -> Self {
        Self {
            gravity,
            max_drag_distance: sanitize_drag_distance(max_drag_distance),
            gestures,
            locked: false,
            progress: 0.0,
            state: MenuState::Closed,
            gesture: None,
            velocity: VelocityTracker1D::new(),
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn gravity(&self) -> SlideGravity {
        self.gravity
    }

    pub fn max_drag_distance(&self) -> f32 {
        self.max_drag_distance
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn gesture_phase(&self) -> Option<GesturePhase> {
        self.gesture.map(|gesture| gesture.phase)
    }

    pub fn set_gravity(&mut self, gravity: SlideGravity) {
        self.gravity = gravity;
    }

    pub fn set_max_drag_distance(&mut self, px: f32) {
        self.max_drag_distance = sanitize_drag_distance(px);
    }

    /// Locking blocks new gestures and abandons a captured one.
    pub fn set_locked(&mut self, locked: bool) -> DragEffects {
        self.locked = locked;
        if locked && self.gesture.is_some() {
            return self.finish_gesture(0.0);
        }
        DragEffects::new()
    }

    /// Starts tracking a press. Returns false when the press is ignored.
    pub fn press(&mut self, event: &PointerEvent, over_content: bool) -> bool {
        if self.locked || !over_content {
            return false;
        }
        if matches!(self.gesture, Some(gesture) if gesture.pointer != event.id) {
            return false;
        }
        self.gesture = Some(ActiveGesture {
            pointer: event.id,
            origin: event.position,
            start_progress: self.progress,
            phase: GesturePhase::Pending,
        });
        self.velocity.reset();
        self.velocity.add_position(event.time_ms, event.position.x);
        true
    }

    pub fn drag(&mut self, event: &PointerEvent) -> DragEffects {
        let mut effects = DragEffects::new();
        let Some(mut gesture) = self.gesture.filter(|g| g.pointer == event.id) else {
            return effects;
        };
        self.velocity.add_position(event.time_ms, event.position.x);

        let dx = event.position.x - gesture.origin.x;
        let dy = event.position.y - gesture.origin.y;
        let along = self.gravity.opening_delta(dx);

        if gesture.phase == GesturePhase::Pending {
            let slop = self.gestures.touch_slop;
            if dx.abs() > slop && dx.abs() > dy.abs() {
                let can_move = (along > 0.0 && gesture.start_progress < 1.0)
                    || (along < 0.0 && gesture.start_progress > 0.0);
                gesture.phase = if can_move {
                    GesturePhase::Dragging
                } else {
                    GesturePhase::Rejected
                };
            } else if dy.abs() > slop {
                gesture.phase = GesturePhase::Rejected;
            }
            if gesture.phase == GesturePhase::Dragging {
                log::debug!("drag captured at progress {:.3}", gesture.start_progress);
                self.push_state(MenuState::Dragging, &mut effects);
            }
        }

        if gesture.phase == GesturePhase::Dragging {
            let progress = gesture.start_progress + along / self.max_drag_distance;
            self.push_progress(progress, &mut effects);
        }
        self.gesture = Some(gesture);
        effects
    }

    pub fn release(&mut self, event: &PointerEvent) -> DragEffects {
        if !matches!(self.gesture, Some(gesture) if gesture.pointer == event.id) {
            return DragEffects::new();
        }
        self.velocity.add_position(event.time_ms, event.position.x);
        let velocity = self.gravity.direction()
            * self
                .velocity
                .velocity_clamped(self.gestures.max_fling_velocity);
        self.finish_gesture(velocity)
    }

    pub fn cancel(&mut self) -> DragEffects {
        if self.gesture.is_none() {
            return DragEffects::new();
        }
        self.finish_gesture(0.0)
    }

    fn finish_gesture(&mut self, velocity: f32) -> DragEffects {
        let mut effects = DragEffects::new();
        let Some(gesture) = self.gesture.take() else {
            return effects;
        };
        self.velocity.reset();

        // A press that interrupted a settle must still bring the menu to rest.
        let mid_flight = self.state == MenuState::Dragging;
        if gesture.phase == GesturePhase::Dragging || mid_flight {
            let velocity = if gesture.phase == GesturePhase::Dragging {
                velocity
            } else {
                0.0
            };
            let target = settle_target(self.progress, velocity, self.gestures.min_fling_velocity);
            log::debug!(
                "released at progress {:.3} with velocity {:.1}px/s, settling {:?}",
                self.progress,
                velocity,
                target
            );
            effects.push(DragEffect::Settle(SettleRequest { target, velocity }));
        }
        effects
    }

    /// Prepares an animated settle towards `target`, dropping any gesture.
    ///
    /// Returns the effects plus whether an animation is needed; when the
    /// progress already sits on the target boundary the state is finalised
    /// immediately.
    pub fn begin_settle(&mut self, target: MenuState) -> (DragEffects, bool) {
        let Some(boundary) = target.boundary_progress() else {
            return (DragEffects::new(), false);
        };
        self.gesture = None;
        self.velocity.reset();
        if self.progress == boundary {
            return (self.snap(target), false);
        }
        let mut effects = DragEffects::new();
        self.push_state(MenuState::Dragging, &mut effects);
        (effects, true)
    }

    /// Applies one frame of a settle animation.
    pub fn settle_frame(&mut self, value: f32, finished: bool, target: MenuState) -> DragEffects {
        if finished {
            return self.snap(target);
        }
        let mut effects = DragEffects::new();
        self.push_state(MenuState::Dragging, &mut effects);
        self.push_progress(value, &mut effects);
        effects
    }

    /// Jumps to a resting state, dropping any gesture in progress.
    pub fn snap(&mut self, target: MenuState) -> DragEffects {
        let mut effects = DragEffects::new();
        let Some(boundary) = target.boundary_progress() else {
            return effects;
        };
        self.gesture = None;
        self.velocity.reset();
        self.push_progress(boundary, &mut effects);
        self.push_state(target, &mut effects);
        effects
    }

    fn push_progress(&mut self, progress: f32, effects: &mut DragEffects) {
        let progress = progress.clamp(0.0, 1.0);
        if progress != self.progress {
            self.progress = progress;
            log::trace!("drag progress {progress:.4}");
            effects.push(DragEffect::Progress(progress));
        }
    }

    fn push_state(&mut self, state: MenuState, effects: &mut DragEffects) {
        if state != self.state {
            log::debug!("menu state {:?} -> {:?}", self.state, state);
            self.state = state;
            effects.push(DragEffect::State(state));
        }
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
