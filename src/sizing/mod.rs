//! Demand-driven section selection
//!
//! A [`SectionSizer`] maps structural demand to a section record. The
//! generator only talks to the trait, so a catalog can be swapped without
//! touching the pipeline.

mod concrete;
mod steel;

pub use concrete::ConcreteSizer;
pub use steel::SteelCatalog;

use crate::elements::{Material, Section};
use crate::error::GenResult;
use crate::params::MaterialKind;

/// Gravity demand on a floor beam
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamDemand {
    /// Clear span (in)
    pub span: f64,
    /// Width of floor carried by the beam (in)
    pub tributary_width: f64,
    /// Floor pressure (ksi)
    pub floor_pressure: f64,
}

impl BeamDemand {
    /// Uniform line load (kip/in)
    pub fn line_load(&self) -> f64 {
        self.floor_pressure * self.tributary_width
    }

    /// Simple-span midspan moment, wL²/8 (kip-in)
    pub fn moment(&self) -> f64 {
        self.line_load() * self.span.powi(2) / 8.0
    }

    /// Strong-axis inertia limiting midspan deflection to L/360 (in⁴)
    pub fn required_ix(&self, e: f64) -> f64 {
        let allowable = self.span / 360.0;
        5.0 * self.line_load() * self.span.powi(4) / (384.0 * e * allowable)
    }
}

/// Gravity demand on a base column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDemand {
    /// Stories supported by the column
    pub stories: usize,
    /// Governing floor area per story (in²)
    pub tributary_area: f64,
    /// Floor pressure (ksi)
    pub floor_pressure: f64,
}

impl ColumnDemand {
    /// Accumulated axial load (kip)
    pub fn axial(&self) -> f64 {
        self.stories as f64 * self.tributary_area * self.floor_pressure
    }
}

/// Strategy selecting sections from demand.
///
/// Implementations must be pure, and `size_column` must never return a
/// smaller strong-axis inertia for a larger story count. A strategy that
/// cannot produce a section at all returns an error.
pub trait SectionSizer {
    /// Select a beam section for the demand
    fn size_beam(&self, demand: &BeamDemand, material: &Material) -> GenResult<Section>;

    /// Select a column section; `beams` are the beam sections framing into it
    fn size_column(
        &self,
        demand: &ColumnDemand,
        beams: &[&Section],
        material: &Material,
    ) -> GenResult<Section>;
}

/// Default sizing strategy for a material family
pub fn default_sizer(kind: MaterialKind) -> Box<dyn SectionSizer> {
    match kind {
        MaterialKind::Steel => Box::new(SteelCatalog::default()),
        MaterialKind::Concrete => Box::new(ConcreteSizer),
    }
}
