//! Triple friction pendulum (TFP) isolation bearings

use serde::{Deserialize, Serialize};

/// Velocity-dependent friction model of one sliding surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrictionSurface {
    /// Friction model tag understood by the solver
    #[serde(rename = "type")]
    pub model: FrictionModel,
    /// Friction coefficient at low velocity
    pub mu_slow: f64,
    /// Friction coefficient at high velocity
    pub mu_fast: f64,
    /// Velocity transition rate (s/in)
    pub trans_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrictionModel {
    #[default]
    VelDependent,
}

impl FrictionSurface {
    pub fn vel_dependent(mu_slow: f64, mu_fast: f64, trans_rate: f64) -> Self {
        Self {
            model: FrictionModel::VelDependent,
            mu_slow,
            mu_fast,
            trans_rate,
        }
    }

    /// All parameters positive and `mu_fast >= mu_slow`
    pub fn is_valid(&self) -> bool {
        self.mu_slow > 0.0 && self.mu_fast >= self.mu_slow && self.trans_rate > 0.0
    }
}

/// Catalog properties shared by every bearing of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TfpProperties {
    /// Inner sliding surfaces (1 and 4)
    pub inner: FrictionSurface,
    /// Outer sliding surfaces (2 and 3)
    pub outer: FrictionSurface,
    /// Effective radii [L1, L2, L3] (in)
    pub radii: [f64; 3],
    /// Displacement capacities [d1, d2, d3] (in)
    pub disp_capacities: [f64; 3],
    /// Yield displacement (in)
    pub yield_disp: f64,
    /// Vertical stiffness per kip of bearing weight
    pub vert_stiffness_ratio: f64,
    /// Minimum vertical force ratio
    pub min_vert_force: f64,
    /// Element convergence tolerance
    pub tolerance: f64,
}

impl Default for TfpProperties {
    /// Building-class isolator: main radius 168 in (T ≈ 4.1 s), 20 in inner
    /// radii, 25 in main displacement capacity.
    fn default() -> Self {
        Self {
            inner: FrictionSurface::vel_dependent(0.015, 0.030, 25.0),
            outer: FrictionSurface::vel_dependent(0.060, 0.120, 25.0),
            radii: [20.0, 168.0, 20.0],
            disp_capacities: [4.0, 25.0, 4.0],
            yield_disp: 0.08,
            vert_stiffness_ratio: 150.0,
            min_vert_force: 0.1,
            tolerance: 1e-8,
        }
    }
}

impl TfpProperties {
    /// Surfaces ordered as the element expects: [inner, outer, outer, inner]
    pub fn surfaces(&self) -> [FrictionSurface; 4] {
        [self.inner, self.outer, self.outer, self.inner]
    }
}

/// A TFP bearing joining a ground node (i) to a base node (j)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TfpBearing {
    pub id: usize,
    /// Ground node id
    pub node_i: usize,
    /// Base node id
    pub node_j: usize,
    pub surfaces: [FrictionSurface; 4],
    pub radii: [f64; 3],
    pub disp_capacities: [f64; 3],
    /// Vertical load carried by the bearing (kip)
    pub weight: f64,
    pub yield_disp: f64,
    pub vert_stiffness: f64,
    pub min_vert_force: f64,
    pub tolerance: f64,
    pub label: String,
}

impl TfpBearing {
    pub fn new(id: usize, node_i: usize, node_j: usize, weight: f64, props: &TfpProperties) -> Self {
        Self {
            id,
            node_i,
            node_j,
            surfaces: props.surfaces(),
            radii: props.radii,
            disp_capacities: props.disp_capacities,
            weight,
            yield_disp: props.yield_disp,
            vert_stiffness: props.vert_stiffness_ratio * weight,
            min_vert_force: props.min_vert_force,
            tolerance: props.tolerance,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let props = TfpProperties::default();
        assert!(props.surfaces().iter().all(FrictionSurface::is_valid));
        assert!(props.inner.mu_slow < props.outer.mu_slow);
        assert!(props.radii.iter().all(|&r| r > 0.0));
        assert!(props.disp_capacities.iter().all(|&d| d > 0.0));
    }

    #[test]
    fn test_bearing_stiffness_follows_weight() {
        let bearing = TfpBearing::new(1, 201, 1, 84.375, &TfpProperties::default());
        assert!((bearing.vert_stiffness - 150.0 * 84.375).abs() < 1e-9);
        assert_eq!(bearing.surfaces[0], bearing.surfaces[3]);
    }

    #[test]
    fn test_surface_json() {
        let value = serde_json::to_value(FrictionSurface::vel_dependent(0.015, 0.03, 25.0)).unwrap();
        assert_eq!(value["type"], "VelDependent");
        assert_eq!(value["muSlow"], 0.015);
        assert_eq!(value["transRate"], 25.0);
    }
}
