//! Load records and tributary distribution

mod node_load;
mod tributary;

pub use node_load::PointLoad;
pub use tributary::{tributary_area, AxisPosition, NodeClass};
