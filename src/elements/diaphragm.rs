//! Rigid floor diaphragm constraints

use serde::{Deserialize, Serialize};

/// Out-of-plane axis of a floor in the Y-up frame (2 = Y)
pub const Y_UP_PERP_DIRECTION: u8 = 2;

/// Master/constrained node group forcing a floor to move rigidly in-plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RigidDiaphragm {
    pub id: usize,
    pub master_node_id: usize,
    /// Every other node of the floor, master excluded
    pub constrained_node_ids: Vec<usize>,
    pub perp_direction: u8,
    pub label: String,
}

impl RigidDiaphragm {
    pub fn new(id: usize, master_node_id: usize, constrained_node_ids: Vec<usize>) -> Self {
        Self {
            id,
            master_node_id,
            constrained_node_ids,
            perp_direction: Y_UP_PERP_DIRECTION,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Master followed by the constrained nodes
    pub fn node_ids(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.master_node_id).chain(self.constrained_node_ids.iter().copied())
    }
}
