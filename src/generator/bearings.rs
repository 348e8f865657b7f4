//! Ground layer and TFP bearings beneath an isolated base

use log::debug;

use super::grid::GridLayout;
use super::ids::{ground_node_id, grid_label, IdSequence};
use super::loads::nodal_gravity;
use crate::elements::{Node, Restraint, TfpBearing, TfpProperties};

/// Elevation of the ground node layer (in)
pub const GROUND_ELEVATION: f64 = -1.0;

/// One fully restrained ground node under each base node
pub fn ground_nodes(layout: &GridLayout) -> Vec<Node> {
    layout
        .points()
        .map(|(ix, iz)| {
            let [x, _, z] = layout.position(0, ix, iz);
            Node::new(ground_node_id(layout.node_id(0, ix, iz)), x, GROUND_ELEVATION, z)
                .with_restraint(Restraint::fixed())
                .with_label(format!("Ground {}", grid_label(ix, iz)))
        })
        .collect()
}

/// One bearing per base column, carrying that column's gravity share of
/// every floor above.
pub fn bearings(
    layout: &GridLayout,
    floor_pressure: f64,
    props: &TfpProperties,
    ids: &mut IdSequence,
) -> Vec<TfpBearing> {
    let bearings: Vec<TfpBearing> = layout
        .points()
        .map(|(ix, iz)| {
            let base = layout.node_id(0, ix, iz);
            let weight = nodal_gravity(layout, ix, iz, floor_pressure) * layout.stories as f64;
            TfpBearing::new(ids.next_id(), ground_node_id(base), base, weight, props)
                .with_label(format!("TFP Bearing {}", grid_label(ix, iz)))
        })
        .collect();
    debug!("bearings: {} TFP bearings", bearings.len());
    bearings
}
