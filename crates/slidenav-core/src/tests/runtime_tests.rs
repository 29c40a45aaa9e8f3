use super::*;
use std::cell::Cell;

struct CountingScheduler {
    requests: Cell<usize>,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn registering_a_callback_requests_a_frame() {
    let scheduler = Rc::new(CountingScheduler {
        requests: Cell::new(0),
    });
    let runtime = Runtime::new(scheduler.clone());
    let clock = runtime.frame_clock();

    let _registration = clock.with_frame_nanos(|_| {});

    assert_eq!(scheduler.requests.get(), 1);
    assert!(runtime.needs_frame());
    assert!(runtime.has_frame_callbacks());
}

#[test]
fn drain_runs_callbacks_once_with_frame_time() {
    let runtime = Runtime::default();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let seen = Rc::clone(&seen);
        runtime
            .frame_clock()
            .with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };

    runtime.drain_frame_callbacks(16_000_000);
    runtime.drain_frame_callbacks(32_000_000);
    drop(registration);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<crate::FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let first = {
        let fired = Rc::clone(&fired);
        let slot = Rc::clone(&slot);
        let handle = handle.clone();
        runtime.frame_clock().with_frame_nanos(move |_| {
            fired.set(fired.get() + 1);
            let fired = Rc::clone(&fired);
            let next = handle
                .frame_clock()
                .with_frame_nanos(move |_| fired.set(fired.get() + 1));
            slot.borrow_mut().replace(next);
        })
    };

    runtime.drain_frame_callbacks(1);
    assert_eq!(fired.get(), 1);
    assert!(runtime.has_frame_callbacks());

    runtime.drain_frame_callbacks(2);
    assert_eq!(fired.get(), 2);
    drop(first);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true))
    };
    drop(registration);
    runtime.drain_frame_callbacks(1);

    assert!(!fired.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn dead_runtime_hands_out_inactive_registrations() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    drop(runtime);

    let registration = clock.with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    assert!(!clock.runtime_handle().is_alive());
}
