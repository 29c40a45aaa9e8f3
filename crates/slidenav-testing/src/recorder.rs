//! Listeners that remember what they were told.

use std::cell::RefCell;
use std::rc::Rc;

use slidenav::MenuState;

/// Shared log of notified values; clones observe the same log.
#[derive(Clone)]
pub struct Recorder<T> {
    values: Rc<RefCell<Vec<T>>>,
}

pub type ProgressRecorder = Recorder<f32>;
pub type StateRecorder = Recorder<MenuState>;

impl<T: Clone + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A listener appending to this recorder.
    pub fn listener(&self) -> impl Fn(T) + 'static {
        let values = Rc::clone(&self.values);
        move |value| values.borrow_mut().push(value)
    }

    pub fn values(&self) -> Vec<T> {
        self.values.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

impl<T: Clone + 'static> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
