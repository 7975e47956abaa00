use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::css::{StyleKey, StyleValue};
use crate::render::Color;

/// Resolved style properties of one element, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStyle {
    values: IndexMap<StyleKey, StyleValue>,
}

impl LayoutStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, key: StyleKey) -> Option<&StyleValue> {
        self.values.get(&key)
    }

    /// Sets `key`, replacing any earlier value in place.
    pub fn set(&mut self, key: StyleKey, value: StyleValue) {
        self.values.insert(key, value);
    }

    #[must_use]
    pub fn with(mut self, key: StyleKey, value: StyleValue) -> Self {
        self.set(key, value);
        self
    }

    /// Concrete color for `key`; `None` when unset, `auto` or not a color.
    #[must_use]
    pub fn color(&self, key: StyleKey) -> Option<Color> {
        self.value(key).and_then(StyleValue::as_color)
    }

    #[must_use]
    pub fn length(&self, key: StyleKey) -> Option<f64> {
        self.value(key).and_then(StyleValue::as_length)
    }

    #[must_use]
    pub fn keyword(&self, key: StyleKey) -> Option<&str> {
        self.value(key).and_then(StyleValue::as_keyword)
    }

    #[must_use]
    pub fn is_auto(&self, key: StyleKey) -> bool {
        self.value(key).is_some_and(StyleValue::is_auto)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}
