//! Frame elements (beams and columns)

use serde::{Deserialize, Serialize};

/// Role of a frame element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Column,
    Beam,
}

/// A two-node frame element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: ElementType,
    /// Start node id
    pub node_i: usize,
    /// End node id
    pub node_j: usize,
    pub section_id: usize,
    pub material_id: usize,
    pub label: String,
}

impl Element {
    pub fn column(id: usize, node_i: usize, node_j: usize, section_id: usize, material_id: usize) -> Self {
        Self::new(id, ElementType::Column, node_i, node_j, section_id, material_id)
    }

    pub fn beam(id: usize, node_i: usize, node_j: usize, section_id: usize, material_id: usize) -> Self {
        Self::new(id, ElementType::Beam, node_i, node_j, section_id, material_id)
    }

    fn new(
        id: usize,
        kind: ElementType,
        node_i: usize,
        node_j: usize,
        section_id: usize,
        material_id: usize,
    ) -> Self {
        Self {
            id,
            kind,
            node_i,
            node_j,
            section_id,
            material_id,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn is_column(&self) -> bool {
        self.kind == ElementType::Column
    }

    pub fn is_beam(&self) -> bool {
        self.kind == ElementType::Beam
    }

    /// Node ids as [i, j]
    pub fn nodes(&self) -> [usize; 2] {
        [self.node_i, self.node_j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_creation() {
        let element = Element::column(1, 1, 5, 1, 1).with_label("Col A1 Story 1");
        assert!(element.is_column());
        assert_eq!(element.nodes(), [1, 5]);
    }

    #[test]
    fn test_element_json_keys() {
        let element = Element::beam(3, 5, 6, 2, 1);
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "beam");
        assert_eq!(value["nodeI"], 5);
        assert_eq!(value["sectionId"], 2);
        assert_eq!(value["materialId"], 1);
    }
}
