//! Node - a point of the frame lattice

use serde::{Deserialize, Serialize};

use super::Restraint;

/// A node of the generated model. Coordinates are in inches, Y up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
    /// X coordinate
    pub x: f64,
    /// Y coordinate (elevation)
    pub y: f64,
    /// Z coordinate
    pub z: f64,
    pub restraint: Restraint,
    /// Lumped translational mass (kip-s²/in)
    pub mass: f64,
    pub label: String,
}

impl Node {
    /// Create a free, massless node
    pub fn new(id: usize, x: f64, y: f64, z: f64) -> Self {
        Self {
            id,
            x,
            y,
            z,
            restraint: Restraint::free(),
            mass: 0.0,
            label: String::new(),
        }
    }

    pub fn with_restraint(mut self, restraint: Restraint) -> Self {
        self.restraint = restraint;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
