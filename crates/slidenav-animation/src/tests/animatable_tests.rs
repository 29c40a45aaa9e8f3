use super::*;
use crate::Easing;
use slidenav_core::Runtime;
use std::cell::RefCell;

const FRAME_NANOS: u64 = 16_666_667;

fn recording(runtime: &Runtime, initial: f32) -> (Animatable, Rc<RefCell<Vec<(f32, AnimationStatus)>>>) {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&samples);
    let animatable = Animatable::new(initial, runtime.handle(), move |value, status| {
        sink.borrow_mut().push((value, status));
    });
    (animatable, samples)
}

fn pump(runtime: &Runtime, frames: usize) {
    let mut time = 0;
    for _ in 0..frames {
        if !runtime.has_frame_callbacks() {
            break;
        }
        time += FRAME_NANOS;
        runtime.drain_frame_callbacks(time);
    }
}

#[test]
fn tween_reports_intermediate_values_and_finishes_on_target() {
    let runtime = Runtime::default();
    let (animatable, samples) = recording(&runtime, 0.0);

    animatable.animate_to(0.0, 1.0, AnimationSpec::linear(100));
    assert!(animatable.is_running());
    pump(&runtime, 32);

    let samples = samples.borrow();
    assert!(samples.iter().any(|(v, _)| *v > 0.0 && *v < 1.0));
    assert_eq!(samples.last(), Some(&(1.0, AnimationStatus::Finished)));
    assert!(!animatable.is_running());
    assert_eq!(animatable.value(), 1.0);
}

#[test]
fn first_frame_only_anchors_start_time() {
    let runtime = Runtime::default();
    let (animatable, samples) = recording(&runtime, 0.25);

    animatable.animate_to(0.25, 0.75, AnimationSpec::tween(200, Easing::LinearOutSlowIn));
    runtime.drain_frame_callbacks(5 * FRAME_NANOS);

    assert_eq!(samples.borrow().as_slice(), &[(0.25, AnimationStatus::Running)]);
}

#[test]
fn new_animation_supersedes_running_one() {
    let runtime = Runtime::default();
    let (animatable, samples) = recording(&runtime, 0.0);

    animatable.animate_to(0.0, 1.0, AnimationSpec::linear(100));
    pump(&runtime, 3);
    let midway = animatable.value();
    animatable.animate_to(midway, 0.0, AnimationSpec::linear(100));
    pump(&runtime, 32);

    assert_eq!(animatable.target(), 0.0);
    assert_eq!(samples.borrow().last(), Some(&(0.0, AnimationStatus::Finished)));
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn stop_from_listener_prevents_rescheduling() {
    let runtime = Runtime::default();
    let slot: Rc<RefCell<Option<Animatable>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(RefCell::new(0));

    let animatable = {
        let slot = Rc::clone(&slot);
        let calls = Rc::clone(&calls);
        Animatable::new(0.0, runtime.handle(), move |_, _| {
            *calls.borrow_mut() += 1;
            if let Some(animatable) = slot.borrow().as_ref() {
                animatable.stop();
            }
        })
    };
    slot.borrow_mut().replace(animatable.clone());

    animatable.animate_to(0.0, 1.0, AnimationSpec::linear(100));
    pump(&runtime, 10);

    assert_eq!(*calls.borrow(), 1);
    assert!(!animatable.is_running());
    slot.borrow_mut().take();
}

#[test]
fn snap_to_cancels_without_notifying() {
    let runtime = Runtime::default();
    let (animatable, samples) = recording(&runtime, 0.0);

    animatable.animate_to(0.0, 1.0, AnimationSpec::linear(100));
    animatable.snap_to(0.4);
    pump(&runtime, 10);

    assert!(samples.borrow().is_empty());
    assert_eq!(animatable.value(), 0.4);
}
