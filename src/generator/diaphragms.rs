//! Rigid floor diaphragms

use log::debug;

use super::grid::GridLayout;
use super::ids::IdSequence;
use crate::elements::RigidDiaphragm;

/// One diaphragm per elevated floor; the first node of the floor is master
pub fn diaphragms(layout: &GridLayout, ids: &mut IdSequence) -> Vec<RigidDiaphragm> {
    let diaphragms: Vec<RigidDiaphragm> = (1..=layout.stories)
        .map(|level| {
            let mut floor = layout.points().map(|(ix, iz)| layout.node_id(level, ix, iz));
            let master = floor.next().unwrap_or_default();
            RigidDiaphragm::new(ids.next_id(), master, floor.collect())
                .with_label(format!("Floor {}", level))
        })
        .collect();
    debug!("diaphragms: {} rigid floors", diaphragms.len());
    diaphragms
}
