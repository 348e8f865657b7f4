//! Structural node lattice

use log::debug;

use super::ids::grid_label;
use super::loads::nodal_gravity;
use crate::elements::{Node, Restraint};
use crate::params::{BaseType, FrameParams};

/// Gravitational acceleration (in/s²)
pub const GRAVITY: f64 = 386.4;

/// Plan grid and level geometry in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub bays_x: usize,
    pub bays_z: usize,
    pub stories: usize,
    /// Bay width along X (in)
    pub bay_x: f64,
    /// Bay width along Z (in)
    pub bay_z: f64,
    /// Story height (in)
    pub story_height: f64,
}

impl GridLayout {
    pub fn from_params(params: &FrameParams) -> Self {
        Self {
            bays_x: params.bays_x,
            bays_z: params.bays_z,
            stories: params.stories,
            bay_x: params.bay_width_x_in(),
            bay_z: params.bay_width_z_in(),
            story_height: params.story_height_in(),
        }
    }

    pub fn lines_x(&self) -> usize {
        self.bays_x + 1
    }

    pub fn lines_z(&self) -> usize {
        self.bays_z + 1
    }

    pub fn nodes_per_floor(&self) -> usize {
        self.lines_x() * self.lines_z()
    }

    /// Position of `(ix, iz)` within a level, Z rows of X runs
    pub fn grid_index(&self, ix: usize, iz: usize) -> usize {
        iz * self.lines_x() + ix
    }

    /// Structural node id of grid point `(ix, iz)` on `level`
    pub fn node_id(&self, level: usize, ix: usize, iz: usize) -> usize {
        level * self.nodes_per_floor() + self.grid_index(ix, iz) + 1
    }

    /// Highest structural node id (top level, last grid point)
    pub fn max_node_id(&self) -> usize {
        self.nodes_per_floor() * (self.stories + 1)
    }

    pub fn elevation(&self, level: usize) -> f64 {
        level as f64 * self.story_height
    }

    pub fn position(&self, level: usize, ix: usize, iz: usize) -> [f64; 3] {
        [ix as f64 * self.bay_x, self.elevation(level), iz as f64 * self.bay_z]
    }

    /// Plan grid points in id order
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> {
        let (lines_x, lines_z) = (self.lines_x(), self.lines_z());
        (0..lines_z).flat_map(move |iz| (0..lines_x).map(move |ix| (ix, iz)))
    }
}

/// Nodes of every level `0..=stories`.
///
/// Level 0 is fully restrained on a fixed base and free on an isolated
/// base; elevated levels are free and carry their tributary gravity mass.
pub fn structural_nodes(layout: &GridLayout, base_type: BaseType, floor_pressure: f64) -> Vec<Node> {
    let base_restraint = match base_type {
        BaseType::Fixed => Restraint::fixed(),
        BaseType::Isolated => Restraint::free(),
    };

    let mut nodes = Vec::with_capacity(layout.max_node_id());
    for level in 0..=layout.stories {
        for (ix, iz) in layout.points() {
            let [x, y, z] = layout.position(level, ix, iz);
            let node = Node::new(layout.node_id(level, ix, iz), x, y, z);
            let node = if level == 0 {
                node.with_restraint(base_restraint)
                    .with_label(format!("Base {}", grid_label(ix, iz)))
            } else {
                node.with_mass(nodal_gravity(layout, ix, iz, floor_pressure) / GRAVITY)
                    .with_label(format!("Story {} {}", level, grid_label(ix, iz)))
            };
            nodes.push(node);
        }
    }

    debug!("grid: {} structural nodes on {} levels", nodes.len(), layout.stories + 1);
    nodes
}
