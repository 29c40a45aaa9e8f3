use super::*;
use std::cell::RefCell;

#[test]
fn notifies_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = DragListeners::new();

    for name in ["toolbar", "analytics", "shadow"] {
        let log = Rc::clone(&log);
        registry.add(move |progress| log.borrow_mut().push((name, progress)));
    }
    registry.notify(0.25);

    assert_eq!(
        log.borrow().as_slice(),
        &[("toolbar", 0.25), ("analytics", 0.25), ("shadow", 0.25)]
    );
}

#[test]
fn removal_keeps_remaining_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = DragStateListeners::new();

    let ids: Vec<_> = (0..3)
        .map(|index| {
            let log = Rc::clone(&log);
            registry.add(move |state| log.borrow_mut().push((index, state)))
        })
        .collect();

    assert!(registry.remove(ids[1]));
    assert!(!registry.remove(ids[1]));
    assert!(!registry.contains(ids[1]));
    registry.notify(MenuState::Open);

    assert_eq!(
        log.borrow().as_slice(),
        &[(0, MenuState::Open), (2, MenuState::Open)]
    );
    assert_eq!(registry.len(), 2);
}

#[test]
fn same_closure_may_register_twice() {
    let count = Rc::new(RefCell::new(0));
    let listener: Rc<dyn Fn(f32)> = {
        let count = Rc::clone(&count);
        Rc::new(move |_: f32| *count.borrow_mut() += 1)
    };
    let mut registry = DragListeners::default();
    registry.add_rc(Rc::clone(&listener));
    registry.add_rc(listener);

    registry.notify(1.0);

    assert_eq!(*count.borrow(), 2);
}
