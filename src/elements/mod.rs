//! Model entity records

mod bearing;
mod diaphragm;
mod material;
mod member;
mod node;
mod section;
mod support;

pub use bearing::{FrictionModel, FrictionSurface, TfpBearing, TfpProperties};
pub use diaphragm::{RigidDiaphragm, Y_UP_PERP_DIRECTION};
pub use material::Material;
pub use member::{Element, ElementType};
pub use node::Node;
pub use section::Section;
pub use support::Restraint;
