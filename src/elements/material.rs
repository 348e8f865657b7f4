//! Material properties (kip-in units)

use serde::{Deserialize, Serialize};

use crate::params::MaterialKind;

/// Material record of the generated model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: usize,
    pub name: String,
    /// Modulus of elasticity (ksi)
    #[serde(rename = "E")]
    pub e: f64,
    /// Yield strength, or f'c for concrete (ksi)
    #[serde(rename = "Fy")]
    pub fy: f64,
    /// Weight density (kip/in³)
    pub density: f64,
    /// Poisson's ratio
    pub nu: f64,
}

impl Material {
    /// ASTM A992 Grade 50 structural steel
    pub fn steel(id: usize) -> Self {
        Self {
            id,
            name: "A992 Gr50 Steel".to_string(),
            e: 29000.0,
            fy: 50.0,
            density: 0.000284, // 490 pcf
            nu: 0.3,
        }
    }

    /// Normal-weight concrete, f'c = 4 ksi
    pub fn concrete(id: usize) -> Self {
        Self {
            id,
            name: "Normal-Weight Concrete (f'c = 4 ksi)".to_string(),
            e: 3600.0,
            fy: 4.0,
            density: 0.0000868, // 150 pcf
            nu: 0.2,
        }
    }

    pub fn for_kind(kind: MaterialKind, id: usize) -> Self {
        match kind {
            MaterialKind::Steel => Self::steel(id),
            MaterialKind::Concrete => Self::concrete(id),
        }
    }
}
