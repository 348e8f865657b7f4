//! Gravity load distribution by tributary area

use log::debug;

use super::grid::GridLayout;
use super::ids::IdSequence;
use crate::error::{GenError, GenResult};
use crate::loads::{tributary_area, PointLoad};

/// Gravity load (kip) carried by grid point `(ix, iz)` on one floor
pub fn nodal_gravity(layout: &GridLayout, ix: usize, iz: usize, floor_pressure: f64) -> f64 {
    tributary_area(ix, iz, layout.bays_x, layout.bays_z, layout.bay_x, layout.bay_z) * floor_pressure
}

/// The lightest nodal load (a corner on one floor) and the heaviest column
/// load (the most loaded point over every story) must both be positive
/// normal numbers.
pub fn check_load_range(layout: &GridLayout, floor_pressure: f64) -> GenResult<()> {
    let lightest = nodal_gravity(layout, 0, 0, floor_pressure);
    let heaviest = nodal_gravity(layout, layout.bays_x.min(1), layout.bays_z.min(1), floor_pressure)
        * layout.stories as f64;
    for load in [lightest, heaviest] {
        if !load.is_normal() || load < 0.0 {
            return Err(GenError::invalid(
                "bayWidthX",
                format!(
                    "bay widths and floor pressure give a tributary load of {} kip, \
                     which is not a positive finite number",
                    load
                ),
            ));
        }
    }
    Ok(())
}

/// One downward load per node on every elevated floor
pub fn gravity_loads(layout: &GridLayout, floor_pressure: f64, ids: &mut IdSequence) -> Vec<PointLoad> {
    let mut loads = Vec::with_capacity(layout.nodes_per_floor() * layout.stories);
    for level in 1..=layout.stories {
        for (ix, iz) in layout.points() {
            let magnitude = nodal_gravity(layout, ix, iz, floor_pressure);
            loads.push(PointLoad::gravity(ids.next_id(), layout.node_id(level, ix, iz), magnitude));
        }
    }
    debug!("loads: {} gravity loads", loads.len());
    loads
}
