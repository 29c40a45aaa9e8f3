//! Ordered observer registries for drag progress and menu state.
//!
//! Insertion order is notification order. Listeners run synchronously on the
//! UI thread and must not block.

use std::rc::Rc;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::MenuState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct ListenerRegistry<T> {
    next_id: u64,
    listeners: IndexMap<ListenerId, Rc<dyn Fn(T)>>,
}

/// Receives drag progress in [0, 1] on every change.
pub type DragListeners = ListenerRegistry<f32>;

/// Receives each discrete menu state transition.
pub type DragStateListeners = ListenerRegistry<MenuState>;

impl<T: Copy> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            listeners: IndexMap::new(),
        }
    }

    pub fn add(&mut self, listener: impl Fn(T) + 'static) -> ListenerId {
        self.add_rc(Rc::new(listener))
    }

    pub fn add_rc(&mut self, listener: Rc<dyn Fn(T)>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Returns false when `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Copies the current listeners so they can be invoked without holding
    /// a borrow of whatever owns this registry.
    pub fn snapshot(&self) -> SmallVec<[Rc<dyn Fn(T)>; 4]> {
        self.listeners.values().cloned().collect()
    }

    pub fn notify(&self, value: T) {
        for listener in self.snapshot() {
            listener(value);
        }
    }
}

impl<T: Copy> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/listeners_tests.rs"]
mod tests;
