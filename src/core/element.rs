use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::css::LayoutStyle;

pub const TAG_NAME_CHART: &str = "chart";
pub const TAG_NAME_PLOT: &str = "plot";
pub const TAG_NAME_SERIES: &str = "series";
pub const TAG_NAME_GROUP: &str = "group";
pub const TAG_NAME_TITLE: &str = "title";
pub const TAG_NAME_SUBTITLE: &str = "subtitle";
pub const TAG_NAME_AXIS: &str = "axis";
pub const TAG_NAME_LABEL: &str = "label";
pub const TAG_NAME_LEGEND: &str = "legend";

pub const ATTRIBUTE_CATEGORICAL: &str = "categorical";
pub const ATTRIBUTE_BY_ROW: &str = "byrow";
pub const ATTRIBUTE_TYPE: &str = "type";
pub const ATTRIBUTE_COLUMN: &str = "column";
pub const ATTRIBUTE_STYLE: &str = "style";
pub const ATTRIBUTE_VISIBLE: &str = "visible";
pub const ATTRIBUTE_TOOLTIPS: &str = "tooltips";
pub const ATTRIBUTE_URLS: &str = "urls";

/// Stable index of an element inside one `ChartDocument` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u32);

impl ElementId {
    pub const ROOT: Self = Self(0);

    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One tag of a chart definition.
///
/// Attribute values are two-state: a present attribute may carry an explicit
/// null (`None`), which readers treat the same as an absent attribute.
/// Children are arena ids owned by the enclosing `ChartDocument`; an element
/// that is not yet part of a document has none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartElement {
    tag_name: String,
    attributes: IndexMap<String, Option<String>>,
    text: Option<String>,
    layout_style: LayoutStyle,
    pub(crate) children: SmallVec<[ElementId; 4]>,
}

impl ChartElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tag(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn set_tag_name(&mut self, tag_name: impl Into<String>) {
        self.tag_name = tag_name.into();
    }

    #[must_use]
    pub fn has_tag(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), Some(value.into()));
    }

    /// Records the attribute as present but null.
    pub fn set_null_attribute(&mut self, name: impl Into<String>) {
        self.attributes.insert(name.into(), None);
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Option<String>> {
        self.attributes.shift_remove(name)
    }

    /// Returns the attribute value, or `None` when absent or null.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attribute_entry(name).flatten()
    }

    /// Two-state lookup: outer `None` is absent, inner `None` is explicit null.
    #[must_use]
    pub fn attribute_entry(&self, name: &str) -> Option<Option<&str>> {
        self.attributes.get(name).map(Option::as_deref)
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    #[must_use]
    pub fn layout_style(&self) -> &LayoutStyle {
        &self.layout_style
    }

    pub fn layout_style_mut(&mut self) -> &mut LayoutStyle {
        &mut self.layout_style
    }

    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub(crate) fn attribute_map(&self) -> &IndexMap<String, Option<String>> {
        &self.attributes
    }

    pub(crate) fn from_parts(
        tag_name: String,
        attributes: IndexMap<String, Option<String>>,
        text: Option<String>,
    ) -> Self {
        Self {
            tag_name,
            attributes,
            text,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartElement, TAG_NAME_SERIES};

    #[test]
    fn null_attribute_is_present_but_valueless() {
        let mut element = ChartElement::with_tag(TAG_NAME_SERIES);
        element.set_null_attribute("column");

        assert!(element.has_attribute("column"));
        assert_eq!(element.attribute_entry("column"), Some(None));
        assert_eq!(element.attribute("column"), None);
        assert_eq!(element.attribute_entry("missing"), None);
    }

    #[test]
    fn attributes_keep_insertion_order_and_overwrite_in_place() {
        let mut element = ChartElement::new();
        element.set_attribute("b", "1");
        element.set_attribute("a", "2");
        element.set_attribute("b", "3");

        let collected: Vec<_> = element.attributes().collect();
        assert_eq!(collected, vec![("b", Some("3")), ("a", Some("2"))]);
    }
}
