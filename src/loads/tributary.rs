//! Tributary-area classification of floor grid nodes
//!
//! A node's tributary width along one axis is half of each adjacent bay.
//! With uniform bays that is one full bay for an inner grid line and half
//! a bay on a boundary line, so the tributary area of every node is one
//! bay area scaled by a factor that depends only on its classification.

use serde::{Deserialize, Serialize};

/// Position of a grid line along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    /// First or last line: one adjacent bay
    Boundary,
    /// Two adjacent bays
    Inner,
}

impl AxisPosition {
    /// Position of line `index` on an axis with `bays` bays
    pub fn of(index: usize, bays: usize) -> Self {
        if index == 0 || index >= bays {
            AxisPosition::Boundary
        } else {
            AxisPosition::Inner
        }
    }

    /// Tributary width as a fraction of the bay width
    pub fn width_fraction(&self) -> f64 {
        match self {
            AxisPosition::Boundary => 0.5,
            AxisPosition::Inner => 1.0,
        }
    }
}

/// Plan classification of a floor node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeClass {
    Corner,
    Edge,
    Interior,
}

/// Tributary area per class, as a fraction of one bay area
const AREA_FACTORS: [(NodeClass, f64); 3] = [
    (NodeClass::Corner, 0.25),
    (NodeClass::Edge, 0.5),
    (NodeClass::Interior, 1.0),
];

impl NodeClass {
    /// Classify grid point `(ix, iz)`
    pub fn classify(ix: usize, iz: usize, bays_x: usize, bays_z: usize) -> Self {
        Self::from_axes(AxisPosition::of(ix, bays_x), AxisPosition::of(iz, bays_z))
    }

    pub fn from_axes(x: AxisPosition, z: AxisPosition) -> Self {
        match (x, z) {
            (AxisPosition::Boundary, AxisPosition::Boundary) => NodeClass::Corner,
            (AxisPosition::Inner, AxisPosition::Inner) => NodeClass::Interior,
            _ => NodeClass::Edge,
        }
    }

    /// Tributary area as a fraction of one bay area
    pub fn area_factor(&self) -> f64 {
        AREA_FACTORS
            .iter()
            .find(|(class, _)| class == self)
            .map(|&(_, factor)| factor)
            .unwrap_or(1.0)
    }
}

/// Tributary area (in²) of grid point `(ix, iz)` for the given bay widths (in)
pub fn tributary_area(
    ix: usize,
    iz: usize,
    bays_x: usize,
    bays_z: usize,
    bay_width_x: f64,
    bay_width_z: f64,
) -> f64 {
    NodeClass::classify(ix, iz, bays_x, bays_z).area_factor() * bay_width_x * bay_width_z
}
