//! Section properties for frame elements (inches)

use serde::{Deserialize, Serialize};

/// Cross-section properties for frame elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: usize,
    pub name: String,
    /// Cross-sectional area in in²
    pub area: f64,
    /// Strong-axis moment of inertia in in⁴
    #[serde(rename = "Ix")]
    pub ix: f64,
    /// Weak-axis moment of inertia in in⁴
    #[serde(rename = "Iy")]
    pub iy: f64,
    /// Strong-axis plastic section modulus in in³
    #[serde(rename = "Zx")]
    pub zx: f64,
    /// Overall depth
    pub d: f64,
    /// Flange width
    pub bf: f64,
    /// Web thickness
    pub tw: f64,
    /// Flange thickness
    pub tf: f64,
}

impl Section {
    /// Rolled wide-flange shape from tabulated properties
    #[allow(clippy::too_many_arguments)]
    pub fn w_shape(
        name: &str,
        area: f64,
        d: f64,
        bf: f64,
        tw: f64,
        tf: f64,
        ix: f64,
        zx: f64,
        iy: f64,
    ) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            area,
            ix,
            iy,
            zx,
            d,
            bf,
            tw,
            tf,
        }
    }

    /// Solid rectangle `width` x `depth`, strong axis about the width.
    ///
    /// A rectangle is recorded as a degenerate I-shape: the web spans the
    /// full width and there are no flanges.
    pub fn rectangular(name: &str, width: f64, depth: f64) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            area: width * depth,
            ix: width * depth.powi(3) / 12.0,
            iy: depth * width.powi(3) / 12.0,
            zx: width * depth.powi(2) / 4.0,
            d: depth,
            bf: width,
            tw: width,
            tf: 0.0,
        }
    }

    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Same shape regardless of the id it is filed under
    pub fn same_shape(&self, other: &Section) -> bool {
        self.name == other.name
            && self.area == other.area
            && self.ix == other.ix
            && self.iy == other.iy
    }
}
