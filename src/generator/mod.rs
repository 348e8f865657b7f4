//! Frame generation pipeline
//!
//! Grid → connectivity → (library, loads, bearings, diaphragms) → assembly.
//! Every stage is a pure function of the parameter record, the options and
//! the grid layout; the assembler owns the id sequences and merges the
//! stage outputs into one [`ModelDocument`].

pub mod bearings;
pub mod connectivity;
pub mod diaphragms;
pub mod grid;
pub mod ids;
pub mod library;
pub mod loads;

use log::info;

use crate::error::{GenError, GenResult};
use crate::model::{ModelDocument, ModelInfo, UNITS};
use crate::options::GeneratorOptions;
use crate::params::{BaseType, FrameParams};
use crate::sizing::{default_sizer, SectionSizer};

use grid::GridLayout;
use ids::IdSequence;
use library::SectionLibrary;

/// Builds model documents from frame parameters
pub struct FrameGenerator {
    options: GeneratorOptions,
    sizer: Option<Box<dyn SectionSizer>>,
}

impl Default for FrameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameGenerator {
    /// Generator with default options and the material's default sizer
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options, sizer: None }
    }

    /// Replace the section sizing strategy for every material
    pub fn with_sizer(mut self, sizer: Box<dyn SectionSizer>) -> Self {
        self.sizer = Some(sizer);
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the complete model. Parameters are validated before any
    /// entity is built.
    pub fn generate(&self, params: &FrameParams) -> GenResult<ModelDocument> {
        params.validate()?;
        self.validate_options()?;

        let layout = GridLayout::from_params(params);
        if params.base_type.is_isolated() {
            ids::check_ground_offset(layout.max_node_id())?;
        }
        let pressure = self.options.floor_pressure_ksi();
        loads::check_load_range(&layout, pressure)?;

        let default;
        let sizer: &dyn SectionSizer = match &self.sizer {
            Some(sizer) => sizer.as_ref(),
            None => {
                default = default_sizer(params.material);
                default.as_ref()
            }
        };
        let library = library::build_library(&layout, params.material, pressure, sizer)?;

        let mut nodes = grid::structural_nodes(&layout, params.base_type, pressure);

        let mut element_ids = IdSequence::new();
        let mut elements = connectivity::columns(&layout, &library.framing, &mut element_ids);
        elements.extend(connectivity::beams_x(&layout, &library.framing, &mut element_ids));
        elements.extend(connectivity::beams_z(&layout, &library.framing, &mut element_ids));

        let loads = loads::gravity_loads(&layout, pressure, &mut IdSequence::new());

        let bearings = match params.base_type {
            BaseType::Isolated => {
                nodes.extend(bearings::ground_nodes(&layout));
                bearings::bearings(&layout, pressure, &self.options.bearing, &mut IdSequence::new())
            }
            BaseType::Fixed => Vec::new(),
        };

        let diaphragms = if params.diaphragms {
            diaphragms::diaphragms(&layout, &mut IdSequence::new())
        } else {
            Vec::new()
        };

        let model = ModelDocument {
            model_info: ModelInfo {
                name: model_name(params),
                units: UNITS.to_string(),
                description: describe(params, &layout, &library, self.options.floor_pressure_psf),
            },
            nodes,
            elements,
            sections: library.sections,
            materials: vec![library.material],
            loads,
            bearings,
            diaphragms,
            ground_motions: Vec::new(),
        };

        if self.options.check_integrity {
            model.validate()?;
        }

        info!(
            "generated '{}': {} nodes, {} elements, {} loads, {} bearings, {} diaphragms",
            model.model_info.name,
            model.nodes.len(),
            model.elements.len(),
            model.loads.len(),
            model.bearings.len(),
            model.diaphragms.len()
        );
        Ok(model)
    }

    fn validate_options(&self) -> GenResult<()> {
        let psf = self.options.floor_pressure_psf;
        if !psf.is_finite() || psf <= 0.0 {
            return Err(GenError::invalid(
                "floorPressurePsf",
                format!("must be positive, got {}", psf),
            ));
        }
        if !self.options.bearing.surfaces().iter().all(|s| s.is_valid()) {
            return Err(GenError::invalid(
                "bearing",
                "friction surfaces need positive values with muFast >= muSlow",
            ));
        }
        let bearing = &self.options.bearing;
        let geometry = bearing.radii.iter().chain(bearing.disp_capacities.iter());
        if !geometry.chain([&bearing.yield_disp, &bearing.vert_stiffness_ratio]).all(|&v| v > 0.0) {
            return Err(GenError::invalid(
                "bearing",
                "radii, displacement capacities, yield displacement and stiffness must be positive",
            ));
        }
        Ok(())
    }
}

/// Generate a model with default options
pub fn generate_model(params: &FrameParams) -> GenResult<ModelDocument> {
    FrameGenerator::new().generate(params)
}

/// `<baysX>x<baysZ>x<stories> <material> <baseType>`
pub fn model_name(params: &FrameParams) -> String {
    format!(
        "{}x{}x{} {} {}",
        params.bays_x, params.bays_z, params.stories, params.material, params.base_type
    )
}

fn describe(params: &FrameParams, layout: &GridLayout, library: &SectionLibrary, pressure_psf: f64) -> String {
    let name_of = |section: Option<&crate::elements::Section>| {
        section.map(|s| s.name.clone()).unwrap_or_default()
    };
    let (beam_x, beam_z) = (name_of(library.beam_x()), name_of(library.beam_z()));
    let beams = if library.framing.beam_x_section == library.framing.beam_z_section {
        format!("{} beams", beam_x)
    } else {
        format!("{} (X) / {} (Z) beams", beam_x, beam_z)
    };

    let mut description = format!(
        "{}-story 3D {} moment frame, {}x{} bays @ {} ft x {} ft, {} ft stories. \
         {} columns, {}. Floor load {} psf. {}.",
        params.stories,
        params.material,
        params.bays_x,
        params.bays_z,
        params.bay_width_x,
        params.bay_width_z,
        params.story_height,
        name_of(library.column()),
        beams,
        pressure_psf,
        library.material.name,
    );
    match params.base_type {
        BaseType::Fixed => description.push_str(" Fixed-base."),
        BaseType::Isolated => description.push_str(&format!(
            " Triple Friction Pendulum (TFP) isolation at all {} base columns.",
            layout.nodes_per_floor()
        )),
    }
    if params.diaphragms {
        description.push_str(&format!(" Rigid floor diaphragms at {} levels.", params.stories));
    }
    description
}
