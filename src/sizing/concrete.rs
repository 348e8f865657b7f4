//! Proportioning rules for cast-in-place concrete frames

use super::{BeamDemand, ColumnDemand, SectionSizer};
use crate::elements::{Material, Section};
use crate::error::GenResult;

/// Smallest member dimension (in)
const MIN_DIMENSION: f64 = 12.0;
/// Span-to-depth ratio for beams with one end continuous
const SPAN_DEPTH_RATIO: f64 = 18.5;
/// Fraction of f'c available to gravity axial stress
const AXIAL_UTILIZATION: f64 = 0.4;

/// Rectangular beams and square columns sized by rule of thumb
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteSizer;

/// Round up to the next even inch, never below the minimum dimension
fn dimension(value: f64) -> f64 {
    ((value / 2.0).ceil() * 2.0).max(MIN_DIMENSION)
}

impl SectionSizer for ConcreteSizer {
    fn size_beam(&self, demand: &BeamDemand, _material: &Material) -> GenResult<Section> {
        let depth = dimension(demand.span / SPAN_DEPTH_RATIO);
        let width = dimension(depth / 2.0);
        Ok(Section::rectangular(&format!("RC {}x{}", width, depth), width, depth))
    }

    fn size_column(
        &self,
        demand: &ColumnDemand,
        beams: &[&Section],
        material: &Material,
    ) -> GenResult<Section> {
        let axial_side = (demand.axial() / (AXIAL_UTILIZATION * material.fy)).sqrt();
        let beam_width = beams.iter().map(|b| b.bf).fold(0.0, f64::max);
        let side = dimension(axial_side.max(beam_width));
        Ok(Section::rectangular(&format!("RC {}x{} Column", side, side), side, side))
    }
}
