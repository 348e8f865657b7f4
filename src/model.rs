//! Model document - the generator's output

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::elements::{Element, Material, Node, RigidDiaphragm, Section, TfpBearing};
use crate::error::{GenError, GenResult};
use crate::loads::PointLoad;

/// Unit system of every generated document
pub const UNITS: &str = "kip-in";

/// Descriptive metadata of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub units: String,
    pub description: String,
}

/// Acceleration record for time-history analysis, supplied by the user
/// after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundMotion {
    pub id: usize,
    pub name: String,
    /// Time step (s)
    pub dt: f64,
    pub acceleration: Vec<f64>,
    /// DOF direction (1 = X, 2 = Y, 3 = Z)
    pub direction: u8,
    pub scale_factor: f64,
}

/// A complete frame model ready for the solver boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    pub model_info: ModelInfo,
    pub nodes: Vec<Node>,
    pub elements: Vec<Element>,
    pub sections: Vec<Section>,
    pub materials: Vec<Material>,
    pub loads: Vec<PointLoad>,
    pub bearings: Vec<TfpBearing>,
    pub diaphragms: Vec<RigidDiaphragm>,
    pub ground_motions: Vec<GroundMotion>,
}

/// Collection sizes of a model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStats {
    pub structural_nodes: usize,
    pub ground_nodes: usize,
    pub columns: usize,
    pub beams_x: usize,
    pub beams_z: usize,
    pub sections: usize,
    pub loads: usize,
    pub bearings: usize,
    pub diaphragms: usize,
    /// Sum of vertical load magnitudes (kip)
    pub total_gravity_load: f64,
}

impl ModelDocument {
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn section(&self, id: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn columns(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_column())
    }

    pub fn beams(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_beam())
    }

    /// Nodes at elevation `y`
    pub fn nodes_at(&self, y: f64) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.y == y)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check id uniqueness per collection and every cross-collection reference
    pub fn validate(&self) -> GenResult<()> {
        unique_ids("node", self.nodes.iter().map(|n| n.id))?;
        unique_ids("element", self.elements.iter().map(|e| e.id))?;
        unique_ids("section", self.sections.iter().map(|s| s.id))?;
        unique_ids("material", self.materials.iter().map(|m| m.id))?;
        unique_ids("load", self.loads.iter().map(|l| l.id))?;
        unique_ids("bearing", self.bearings.iter().map(|b| b.id))?;
        unique_ids("diaphragm", self.diaphragms.iter().map(|d| d.id))?;

        let nodes: HashMap<usize, &Node> = self.nodes.iter().map(|n| (n.id, n)).collect();
        let sections: HashSet<usize> = self.sections.iter().map(|s| s.id).collect();
        let materials: HashSet<usize> = self.materials.iter().map(|m| m.id).collect();

        let missing_node = |owner: String, id: usize| {
            GenError::IntegrityViolation(format!("{} references missing node {}", owner, id))
        };

        for element in &self.elements {
            for id in element.nodes() {
                if !nodes.contains_key(&id) {
                    return Err(missing_node(format!("Element {}", element.id), id));
                }
            }
            if !sections.contains(&element.section_id) {
                return Err(GenError::IntegrityViolation(format!(
                    "Element {} references missing section {}",
                    element.id, element.section_id
                )));
            }
            if !materials.contains(&element.material_id) {
                return Err(GenError::IntegrityViolation(format!(
                    "Element {} references missing material {}",
                    element.id, element.material_id
                )));
            }
        }

        for load in &self.loads {
            if !nodes.contains_key(&load.node_id) {
                return Err(missing_node(format!("Load {}", load.id), load.node_id));
            }
            if !load.is_pure_gravity() || !load.fy.is_finite() {
                return Err(GenError::IntegrityViolation(format!(
                    "Load {} is not a finite downward gravity load",
                    load.id
                )));
            }
        }

        for bearing in &self.bearings {
            for id in [bearing.node_i, bearing.node_j] {
                if !nodes.contains_key(&id) {
                    return Err(missing_node(format!("Bearing {}", bearing.id), id));
                }
            }
            if !bearing.weight.is_normal() || bearing.weight < 0.0 {
                return Err(GenError::IntegrityViolation(format!(
                    "Bearing {} carries weight {}",
                    bearing.id, bearing.weight
                )));
            }
        }

        for diaphragm in &self.diaphragms {
            let owner = format!("Diaphragm {}", diaphragm.id);
            let master = nodes
                .get(&diaphragm.master_node_id)
                .ok_or_else(|| missing_node(owner.clone(), diaphragm.master_node_id))?;
            for id in &diaphragm.constrained_node_ids {
                let node = nodes.get(id).ok_or_else(|| missing_node(owner.clone(), *id))?;
                if *id == diaphragm.master_node_id {
                    return Err(GenError::IntegrityViolation(format!(
                        "{} constrains its own master node {}",
                        owner, id
                    )));
                }
                if node.y != master.y {
                    return Err(GenError::IntegrityViolation(format!(
                        "{} node {} is off the master's floor",
                        owner, id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Count entities by population
    pub fn stats(&self) -> ModelStats {
        let nodes: HashMap<usize, &Node> = self.nodes.iter().map(|n| (n.id, n)).collect();
        let runs_along_x = |e: &Element| match (nodes.get(&e.node_i), nodes.get(&e.node_j)) {
            (Some(i), Some(j)) => i.x != j.x,
            _ => false,
        };

        let beams_x = self.beams().filter(|&e| runs_along_x(e)).count();
        ModelStats {
            structural_nodes: self.nodes.iter().filter(|n| n.y >= 0.0).count(),
            ground_nodes: self.nodes.iter().filter(|n| n.y < 0.0).count(),
            columns: self.columns().count(),
            beams_x,
            beams_z: self.beams().count() - beams_x,
            sections: self.sections.len(),
            loads: self.loads.len(),
            bearings: self.bearings.len(),
            diaphragms: self.diaphragms.len(),
            total_gravity_load: self.loads.iter().map(|l| -l.fy).sum(),
        }
    }
}

fn unique_ids(collection: &str, ids: impl Iterator<Item = usize>) -> GenResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(GenError::IntegrityViolation(format!(
                "duplicate {} id {}",
                collection, id
            )));
        }
    }
    Ok(())
}
