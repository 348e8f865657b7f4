//! Material record and auto-sized section catalog of a model

use log::debug;

use super::connectivity::FramingIds;
use super::grid::GridLayout;
use crate::elements::{Material, Section};
use crate::error::GenResult;
use crate::params::MaterialKind;
use crate::sizing::{BeamDemand, ColumnDemand, SectionSizer};

const MATERIAL_ID: usize = 1;
const COLUMN_SECTION_ID: usize = 1;
const BEAM_X_SECTION_ID: usize = 2;
const BEAM_Z_SECTION_ID: usize = 3;

/// The sole material and the sections referenced by the frame
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLibrary {
    pub material: Material,
    pub sections: Vec<Section>,
    pub framing: FramingIds,
}

impl SectionLibrary {
    pub fn section(&self, id: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn column(&self) -> Option<&Section> {
        self.section(self.framing.column_section)
    }

    pub fn beam_x(&self) -> Option<&Section> {
        self.section(self.framing.beam_x_section)
    }

    pub fn beam_z(&self) -> Option<&Section> {
        self.section(self.framing.beam_z_section)
    }
}

/// Size beams for their span and carried width, then columns for the
/// accumulated story load and the beams framing into them.
///
/// Z beams share the X beam section when the sizer picks the same shape.
pub fn build_library(
    layout: &GridLayout,
    kind: MaterialKind,
    floor_pressure: f64,
    sizer: &dyn SectionSizer,
) -> GenResult<SectionLibrary> {
    let material = Material::for_kind(kind, MATERIAL_ID);

    let beam_x = sizer.size_beam(
        &BeamDemand {
            span: layout.bay_x,
            tributary_width: layout.bay_z,
            floor_pressure,
        },
        &material,
    )?;
    let beam_z = sizer.size_beam(
        &BeamDemand {
            span: layout.bay_z,
            tributary_width: layout.bay_x,
            floor_pressure,
        },
        &material,
    )?;
    let column = sizer.size_column(
        &ColumnDemand {
            stories: layout.stories,
            tributary_area: layout.bay_x * layout.bay_z,
            floor_pressure,
        },
        &[&beam_x, &beam_z],
        &material,
    )?;

    let shared_beam = beam_x.same_shape(&beam_z);
    let mut sections = vec![
        column.with_id(COLUMN_SECTION_ID),
        beam_x.with_id(BEAM_X_SECTION_ID),
    ];
    let beam_z_section = if shared_beam {
        BEAM_X_SECTION_ID
    } else {
        sections.push(beam_z.with_id(BEAM_Z_SECTION_ID));
        BEAM_Z_SECTION_ID
    };

    debug!(
        "library: {} with sections {:?}",
        material.name,
        sections.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
    );

    Ok(SectionLibrary {
        material,
        sections,
        framing: FramingIds {
            material: MATERIAL_ID,
            column_section: COLUMN_SECTION_ID,
            beam_x_section: BEAM_X_SECTION_ID,
            beam_z_section,
        },
    })
}
