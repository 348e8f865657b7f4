//! Frame Generator - parametric 3D structural frame models
//!
//! Turns a handful of building parameters (bay counts and widths, story
//! count and height, material, base condition) into a complete, solver-ready
//! finite element model:
//! - Node grid with base restraints and lumped floor masses
//! - Columns and beams in both plan directions
//! - Auto-sized steel W-shapes or reinforced concrete sections
//! - Tributary-area gravity loads
//! - Triple Friction Pendulum (TFP) bearings beneath an isolated base
//! - Rigid floor diaphragms
//!
//! Units are kip and inch throughout; plan dimensions are given in feet.
//!
//! ## Example
//! ```rust
//! use frame_generator::prelude::*;
//!
//! let params = FrameParams::new(3, 3, 30.0, 30.0, 5, 13.0)
//!     .with_base(BaseType::Isolated)
//!     .with_diaphragms(true);
//!
//! let model = generate_model(&params).unwrap();
//!
//! assert_eq!(model.model_info.name, "3x3x5 steel isolated");
//! assert_eq!(model.nodes.len(), 112);
//! assert_eq!(model.bearings.len(), 16);
//! assert_eq!(model.diaphragms.len(), 5);
//!
//! let json = model.to_json().unwrap();
//! assert!(json.contains("\"modelInfo\""));
//! ```

pub mod elements;
pub mod error;
pub mod generator;
pub mod loads;
pub mod model;
pub mod options;
pub mod params;
pub mod sizing;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{
        Element, ElementType, Material, Node, Restraint, RigidDiaphragm, Section, TfpBearing,
        TfpProperties,
    };
    pub use crate::error::{GenError, GenResult};
    pub use crate::generator::{generate_model, FrameGenerator};
    pub use crate::loads::PointLoad;
    pub use crate::model::{ModelDocument, ModelInfo, ModelStats};
    pub use crate::options::GeneratorOptions;
    pub use crate::params::{BaseType, FrameParams, MaterialKind};
    pub use crate::sizing::SectionSizer;
}

#[cfg(feature = "wasm")]
pub mod wasm;
