//! Generator options

use serde::{Deserialize, Serialize};

use crate::elements::TfpProperties;

/// Options controlling model generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Uniform floor pressure used for gravity loads (psf)
    pub floor_pressure_psf: f64,
    /// Catalog properties of the isolation bearings
    pub bearing: TfpProperties,
    /// Verify id uniqueness and references on the assembled document
    pub check_integrity: bool,
}

impl GeneratorOptions {
    /// Floor pressure in kip per square inch
    pub fn floor_pressure_ksi(&self) -> f64 {
        self.floor_pressure_psf / 1000.0 / 144.0
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            floor_pressure_psf: 75.0,
            bearing: TfpProperties::default(),
            check_integrity: true,
        }
    }
}
