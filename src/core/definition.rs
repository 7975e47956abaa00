use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartDocument, ChartElement, ElementId};
use crate::error::{ChartError, ChartResult};

/// Serializable form of one chart-definition element and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinitionNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChartDefinitionNode>,
}

impl ChartDefinitionNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), Some(value.into()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ChartDefinitionNode) -> Self {
        self.children.push(child);
        self
    }

    fn to_element(&self) -> ChartElement {
        ChartElement::from_parts(self.tag.clone(), self.attributes.clone(), self.text.clone())
    }
}

impl ChartDocument {
    /// Builds a document whose root is `definition`.
    pub fn from_definition(definition: &ChartDefinitionNode) -> ChartResult<Self> {
        let mut document = Self::new(definition.to_element());
        let mut pending: Vec<(ElementId, &ChartDefinitionNode)> =
            vec![(ElementId::ROOT, definition)];
        while let Some((parent, node)) = pending.pop() {
            for child in &node.children {
                let id = document.append_child(parent, child.to_element())?;
                pending.push((id, child));
            }
        }
        debug!(
            root = definition.tag.as_str(),
            elements = document.len(),
            "loaded chart definition"
        );
        Ok(document)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let definition: ChartDefinitionNode = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidDefinition(format!("failed to parse chart definition json: {e}"))
        })?;
        Self::from_definition(&definition)
    }

    /// Rebuilds the serializable tree. Layout styles are not part of the
    /// definition and are not exported.
    #[must_use]
    pub fn to_definition(&self) -> ChartDefinitionNode {
        self.definition_of(ElementId::ROOT)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.to_definition()).map_err(|e| {
            ChartError::InvalidDefinition(format!("failed to serialize chart definition: {e}"))
        })
    }

    fn definition_of(&self, id: ElementId) -> ChartDefinitionNode {
        let element = &self.elements_slice()[id.index()];
        ChartDefinitionNode {
            tag: element.tag_name().to_owned(),
            attributes: element.attribute_map().clone(),
            text: element.text().map(str::to_owned),
            children: element
                .children()
                .iter()
                .map(|child| self.definition_of(*child))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartDefinitionNode;
    use crate::core::{ChartDocument, ElementId};

    #[test]
    fn breadth_of_siblings_is_appended_in_document_order() {
        let definition = ChartDefinitionNode::new("chart")
            .with_child(ChartDefinitionNode::new("a").with_child(ChartDefinitionNode::new("a1")))
            .with_child(ChartDefinitionNode::new("b"));
        let doc = ChartDocument::from_definition(&definition).expect("document");

        let tags: Vec<&str> = doc
            .children(ElementId::ROOT)
            .iter()
            .filter_map(|id| doc.element(*id))
            .map(|element| element.tag_name())
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
        assert_eq!(doc.to_definition(), definition);
    }
}
