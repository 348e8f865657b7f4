//! Nodal point loads - forces and moments applied directly to nodes

use serde::{Deserialize, Serialize};

/// A load applied directly to a node (kip, kip-in)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLoad {
    pub id: usize,
    /// Target node id
    pub node_id: usize,
    /// Force in X direction
    pub fx: f64,
    /// Force in Y direction (vertical)
    pub fy: f64,
    /// Force in Z direction
    pub fz: f64,
    /// Moment about X axis
    pub mx: f64,
    /// Moment about Y axis
    pub my: f64,
    /// Moment about Z axis
    pub mz: f64,
}

impl PointLoad {
    /// Create a new node load with all components
    #[allow(clippy::too_many_arguments)]
    pub fn new(id: usize, node_id: usize, fx: f64, fy: f64, fz: f64, mx: f64, my: f64, mz: f64) -> Self {
        Self {
            id,
            node_id,
            fx,
            fy,
            fz,
            mx,
            my,
            mz,
        }
    }

    /// Downward gravity load of the given magnitude
    pub fn gravity(id: usize, node_id: usize, magnitude: f64) -> Self {
        Self::new(id, node_id, 0.0, -magnitude.abs(), 0.0, 0.0, 0.0, 0.0)
    }

    /// Only the vertical component is non-zero, and it points down
    pub fn is_pure_gravity(&self) -> bool {
        self.fy < 0.0
            && self.fx == 0.0
            && self.fz == 0.0
            && self.mx == 0.0
            && self.my == 0.0
            && self.mz == 0.0
    }
}
