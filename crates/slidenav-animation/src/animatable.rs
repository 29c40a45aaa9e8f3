use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slidenav_core::{FrameCallbackRegistration, RuntimeHandle};

use crate::easing::AnimationSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    Running,
    Finished,
}

type ValueListener = Rc<dyn Fn(f32, AnimationStatus)>;

/// A single `f32` animated along the runtime's frame clock.
///
/// Only one animation runs at a time: `animate_to`, `snap_to` and `stop` all
/// supersede whatever was in flight, including from inside the listener.
#[derive(Clone)]
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    runtime: RuntimeHandle,
    listener: ValueListener,
    current: f32,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    generation: u64,
}

impl Animatable {
    /// `listener` receives every value produced by a running animation.
    pub fn new(
        initial: f32,
        runtime: RuntimeHandle,
        listener: impl Fn(f32, AnimationStatus) + 'static,
    ) -> Self {
        let inner = AnimatableInner {
            runtime,
            listener: Rc::new(listener),
            current: initial,
            start: initial,
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            registration: None,
            generation: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Animate from `from` to `target`, cancelling any running animation.
    pub fn animate_to(&self, from: f32, target: f32, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.supersede();
            inner.current = from;
            inner.start = from;
            inner.target = target;
            inner.spec = spec;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `value` without notifying the listener.
    pub fn snap_to(&self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.supersede();
        inner.current = value;
        inner.start = value;
        inner.target = value;
    }

    /// Cancel the running animation, leaving the value where it was.
    pub fn stop(&self) {
        self.inner.borrow_mut().supersede();
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak: Weak<RefCell<AnimatableInner>> = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if !registration.is_active() {
            log::warn!("animation requested on a runtime that has been dropped");
            return;
        }
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let (value, status, listener, generation) = {
            let mut inner = this.borrow_mut();
            // Already fired; dropping it would cancel nothing.
            drop(inner.registration.take());

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start_time);
            let duration = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);

            let status = if linear >= 1.0 {
                inner.current = inner.target;
                inner.start = inner.target;
                inner.start_time_nanos = None;
                AnimationStatus::Finished
            } else {
                let eased = inner.spec.easing.transform(linear);
                inner.current = inner.start + (inner.target - inner.start) * eased;
                AnimationStatus::Running
            };
            (
                inner.current,
                status,
                Rc::clone(&inner.listener),
                inner.generation,
            )
        };

        listener(value, status);

        let superseded = this.borrow().generation != generation;
        if status == AnimationStatus::Running && !superseded {
            Self::schedule_frame(this);
        }
    }
}

impl AnimatableInner {
    fn supersede(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.start_time_nanos = None;
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }
}

#[cfg(test)]
#[path = "tests/animatable_tests.rs"]
mod tests;
