//! Column and beam connectivity derived from the lattice

use log::debug;

use super::grid::GridLayout;
use super::ids::{grid_label, IdSequence};
use crate::elements::Element;

/// Section and material ids assigned to each element family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingIds {
    pub material: usize,
    pub column_section: usize,
    pub beam_x_section: usize,
    pub beam_z_section: usize,
}

/// One column per grid point per story, joining level `s` to `s + 1`
pub fn columns(layout: &GridLayout, framing: &FramingIds, ids: &mut IdSequence) -> Vec<Element> {
    let mut elements = Vec::with_capacity(layout.nodes_per_floor() * layout.stories);
    for story in 0..layout.stories {
        for (ix, iz) in layout.points() {
            let element = Element::column(
                ids.next_id(),
                layout.node_id(story, ix, iz),
                layout.node_id(story + 1, ix, iz),
                framing.column_section,
                framing.material,
            )
            .with_label(format!("Col {} Story {}", grid_label(ix, iz), story + 1));
            elements.push(element);
        }
    }
    debug!("connectivity: {} columns", elements.len());
    elements
}

/// Beams along X on every elevated floor, one per bay
pub fn beams_x(layout: &GridLayout, framing: &FramingIds, ids: &mut IdSequence) -> Vec<Element> {
    let mut elements = Vec::with_capacity(layout.bays_x * layout.lines_z() * layout.stories);
    for level in 1..=layout.stories {
        for iz in 0..layout.lines_z() {
            for ix in 0..layout.bays_x {
                let element = Element::beam(
                    ids.next_id(),
                    layout.node_id(level, ix, iz),
                    layout.node_id(level, ix + 1, iz),
                    framing.beam_x_section,
                    framing.material,
                )
                .with_label(format!(
                    "Beam-X {}-{} Story {}",
                    grid_label(ix, iz),
                    grid_label(ix + 1, iz),
                    level
                ));
                elements.push(element);
            }
        }
    }
    debug!("connectivity: {} X beams", elements.len());
    elements
}

/// Beams along Z on every elevated floor, one per bay
pub fn beams_z(layout: &GridLayout, framing: &FramingIds, ids: &mut IdSequence) -> Vec<Element> {
    let mut elements = Vec::with_capacity(layout.lines_x() * layout.bays_z * layout.stories);
    for level in 1..=layout.stories {
        for ix in 0..layout.lines_x() {
            for iz in 0..layout.bays_z {
                let element = Element::beam(
                    ids.next_id(),
                    layout.node_id(level, ix, iz),
                    layout.node_id(level, ix, iz + 1),
                    framing.beam_z_section,
                    framing.material,
                )
                .with_label(format!(
                    "Beam-Z {}-{} Story {}",
                    grid_label(ix, iz),
                    grid_label(ix, iz + 1),
                    level
                ));
                elements.push(element);
            }
        }
    }
    debug!("connectivity: {} Z beams", elements.len());
    elements
}
