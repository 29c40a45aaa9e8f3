//! Key/value state persisted by the host across reconstruction.

use indexmap::IndexMap;

/// Key under which the container stores whether the menu was open.
pub const MENU_OPENED_KEY: &str = "slidenav.menu_opened";

#[derive(Clone, Debug, PartialEq)]
pub enum SavedValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Ordered bundle of saved values; hosts may share it with other widgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedState {
    values: IndexMap<String, SavedValue>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: SavedValue) {
        self.values.insert(key.into(), value);
    }

    pub fn put_bool(&mut self, key: impl Into<String>, value: bool) {
        self.put(key, SavedValue::Bool(value));
    }

    pub fn get(&self, key: &str) -> Option<&SavedValue> {
        self.values.get(key)
    }

    /// `None` when missing or stored with another type.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(SavedValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_values_round_trip() {
        let mut state = SavedState::new();
        state.put_bool(MENU_OPENED_KEY, true);

        assert_eq!(state.get_bool(MENU_OPENED_KEY), Some(true));
        assert!(state.contains(MENU_OPENED_KEY));
    }

    #[test]
    fn mistyped_values_read_as_missing() {
        let mut state = SavedState::new();
        state.put(MENU_OPENED_KEY, SavedValue::Int(1));
        state.put("title", SavedValue::Text("Inbox".into()));

        assert_eq!(state.get_bool(MENU_OPENED_KEY), None);
        assert_eq!(state.get_bool("missing"), None);
        assert_eq!(state.len(), 2);
    }
}
