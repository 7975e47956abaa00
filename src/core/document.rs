use tracing::trace;

use crate::core::coercion;
use crate::core::element::{
    ATTRIBUTE_BY_ROW, ATTRIBUTE_CATEGORICAL, TAG_NAME_CHART, TAG_NAME_GROUP, TAG_NAME_PLOT,
    TAG_NAME_SERIES, TAG_NAME_TITLE,
};
use crate::core::{ChartElement, ElementId};
use crate::error::{ChartError, ChartResult};

/// Queryable chart definition tree.
///
/// Elements live in an arena addressed by `ElementId`; the root is always
/// `ElementId::ROOT`. Children are appended in document order and the tree is
/// read-only once generation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDocument {
    elements: Vec<ChartElement>,
}

impl ChartDocument {
    /// Wraps `root`. Child ids already present on `root` are dropped because
    /// they cannot refer to this document's arena.
    #[must_use]
    pub fn new(mut root: ChartElement) -> Self {
        root.children.clear();
        Self {
            elements: vec![root],
        }
    }

    #[must_use]
    pub fn root_id(&self) -> ElementId {
        ElementId::ROOT
    }

    #[must_use]
    pub fn root(&self) -> &ChartElement {
        &self.elements[ElementId::ROOT.index()]
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&ChartElement> {
        self.elements.get(id.index())
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut ChartElement> {
        self.elements.get_mut(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: a document holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn elements_slice(&self) -> &[ChartElement] {
        &self.elements
    }

    /// Appends `child` as the last child of `parent` and returns its id.
    pub fn append_child(
        &mut self,
        parent: ElementId,
        mut child: ChartElement,
    ) -> ChartResult<ElementId> {
        if parent.index() >= self.elements.len() {
            return Err(ChartError::UnknownElement(parent));
        }
        let raw = u32::try_from(self.elements.len()).map_err(|_| {
            ChartError::InvalidDefinition("chart definition exceeds u32 elements".to_owned())
        })?;
        let id = ElementId::new(raw);
        child.children.clear();
        self.elements.push(child);
        self.elements[parent.index()].children.push(id);
        Ok(id)
    }

    /// Direct children of `id`, empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        match self.element(id) {
            Some(element) => element.children(),
            None => &[],
        }
    }

    /// Pre-order walk of every element below `id`, excluding `id`.
    pub fn descendants(&self, id: ElementId) -> Descendants<'_> {
        let mut stack = Vec::new();
        stack.extend(self.children(id).iter().rev().copied());
        Descendants {
            document: self,
            stack,
        }
    }

    /// Ids of every element in the document, root first, in document order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::once(ElementId::ROOT).chain(self.descendants(ElementId::ROOT))
    }

    /// Finds elements tagged `tag_name` below `from` in document order.
    ///
    /// A matched element is reported and its subtree is not searched further;
    /// siblings are still visited. `from` itself is never reported.
    #[must_use]
    pub fn find_children_by_name(&self, from: ElementId, tag_name: &str) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.children(from).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let element = &self.elements[id.index()];
            if element.has_tag(tag_name) {
                found.push(id);
            } else {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        trace!(tag = tag_name, from = from.raw(), matches = found.len(), "find children by name");
        found
    }

    /// First element tagged `tag_name` in pre-order, the root included.
    #[must_use]
    pub fn find_first_by_name(&self, tag_name: &str) -> Option<ElementId> {
        self.ids().find(|id| self.elements[id.index()].has_tag(tag_name))
    }

    /// The element carrying chart-level metadata; not necessarily the root.
    #[must_use]
    pub fn chart_element(&self) -> Option<ElementId> {
        self.find_first_by_name(TAG_NAME_CHART)
    }

    #[must_use]
    pub fn series_elements(&self) -> Vec<ElementId> {
        self.find_children_by_name(ElementId::ROOT, TAG_NAME_SERIES)
    }

    #[must_use]
    pub fn group_elements(&self) -> Vec<ElementId> {
        self.find_children_by_name(ElementId::ROOT, TAG_NAME_GROUP)
    }

    #[must_use]
    pub fn plot_element(&self) -> Option<ElementId> {
        self.find_children_by_name(ElementId::ROOT, TAG_NAME_PLOT)
            .first()
            .copied()
    }

    /// Character content of the first `title` element.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.find_children_by_name(ElementId::ROOT, TAG_NAME_TITLE)
            .first()
            .and_then(|id| self.elements[id.index()].text())
    }

    /// See [`coercion::boolean_attribute_value`].
    #[must_use]
    pub fn boolean_attribute_value(element: &ChartElement, name: &str, default: bool) -> bool {
        coercion::boolean_attribute_value(element, name, default)
    }

    /// Reads a boolean flag off the `chart` element, false when unset or when
    /// the document has no `chart` element.
    #[must_use]
    pub fn chart_flag(&self, name: &str) -> bool {
        self.chart_element()
            .and_then(|id| self.element(id))
            .is_some_and(|chart| Self::boolean_attribute_value(chart, name, false))
    }

    #[must_use]
    pub fn is_categorical(&self) -> bool {
        self.chart_flag(ATTRIBUTE_CATEGORICAL)
    }

    #[must_use]
    pub fn is_by_row(&self) -> bool {
        self.chart_flag(ATTRIBUTE_BY_ROW)
    }
}

/// Pre-order iterator returned by [`ChartDocument::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    document: &'a ChartDocument,
    stack: Vec<ElementId>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.document.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartDocument;
    use crate::core::{ChartElement, ElementId, TAG_NAME_CHART, TAG_NAME_SERIES};

    #[test]
    fn descendants_walk_in_document_order() {
        let mut doc = ChartDocument::new(ChartElement::with_tag(TAG_NAME_CHART));
        let a = doc
            .append_child(ElementId::ROOT, ChartElement::with_tag("a"))
            .expect("a");
        let a1 = doc.append_child(a, ChartElement::with_tag("a1")).expect("a1");
        let b = doc
            .append_child(ElementId::ROOT, ChartElement::with_tag("b"))
            .expect("b");

        let order: Vec<ElementId> = doc.descendants(ElementId::ROOT).collect();
        assert_eq!(order, vec![a, a1, b]);
    }

    #[test]
    fn append_to_unknown_parent_is_rejected() {
        let mut doc = ChartDocument::new(ChartElement::new());
        let err = doc
            .append_child(ElementId::new(9), ChartElement::with_tag(TAG_NAME_SERIES))
            .expect_err("unknown parent");
        assert!(matches!(err, crate::ChartError::UnknownElement(id) if id.raw() == 9));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn unknown_search_origin_yields_empty_result() {
        let doc = ChartDocument::new(ChartElement::with_tag(TAG_NAME_CHART));
        assert!(
            doc.find_children_by_name(ElementId::new(42), TAG_NAME_SERIES)
                .is_empty()
        );
    }
}
