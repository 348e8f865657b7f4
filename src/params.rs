//! Input parameter record for frame generation

use std::{fmt, mem};

use serde::{Deserialize, Serialize};

use crate::elements::Node;
use crate::error::{GenError, GenResult};

/// Inches per foot. All document lengths are inches.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Upper bound on records emitted per node: the node, its column, two
/// beams, its load, and the ground node and bearing beneath it
const RECORDS_PER_NODE: usize = 8;

/// Material family of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Steel,
    Concrete,
}

impl MaterialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Steel => "steel",
            MaterialKind::Concrete => "concrete",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Foundation condition at level 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    /// Base nodes rigidly restrained
    Fixed,
    /// Base nodes free, carried on TFP bearings to a restrained ground layer
    Isolated,
}

impl BaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Fixed => "fixed",
            BaseType::Isolated => "isolated",
        }
    }

    pub fn is_isolated(&self) -> bool {
        matches!(self, BaseType::Isolated)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometric and material parameters of a regular 3D moment frame.
///
/// Bay widths and story height are in feet; the generator converts them
/// to inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameParams {
    /// Number of bays along X
    pub bays_x: usize,
    /// Number of bays along Z
    pub bays_z: usize,
    /// Bay width along X (ft)
    pub bay_width_x: f64,
    /// Bay width along Z (ft)
    pub bay_width_z: f64,
    /// Number of stories above the base
    pub stories: usize,
    /// Story height (ft)
    pub story_height: f64,
    pub material: MaterialKind,
    /// Emit one rigid diaphragm per elevated floor
    pub diaphragms: bool,
    pub base_type: BaseType,
}

impl FrameParams {
    /// Create a fixed-base steel frame without diaphragms
    pub fn new(
        bays_x: usize,
        bays_z: usize,
        bay_width_x: f64,
        bay_width_z: f64,
        stories: usize,
        story_height: f64,
    ) -> Self {
        Self {
            bays_x,
            bays_z,
            bay_width_x,
            bay_width_z,
            stories,
            story_height,
            material: MaterialKind::Steel,
            diaphragms: false,
            base_type: BaseType::Fixed,
        }
    }

    pub fn with_material(mut self, material: MaterialKind) -> Self {
        self.material = material;
        self
    }

    pub fn with_base(mut self, base_type: BaseType) -> Self {
        self.base_type = base_type;
        self
    }

    pub fn with_diaphragms(mut self, diaphragms: bool) -> Self {
        self.diaphragms = diaphragms;
        self
    }

    /// Reject non-positive counts and non-positive or non-finite dimensions
    pub fn validate(&self) -> GenResult<()> {
        check_count("baysX", self.bays_x)?;
        check_count("baysZ", self.bays_z)?;
        check_count("stories", self.stories)?;
        check_length("bayWidthX", self.bay_width_x)?;
        check_length("bayWidthZ", self.bay_width_z)?;
        check_length("storyHeight", self.story_height)?;
        self.check_grid_size()
    }

    /// Every node id and record count must fit in memory-addressable sizes
    fn check_grid_size(&self) -> GenResult<()> {
        let too_large = |field: &'static str| GenError::invalid(field, "grid too large");
        let lines_x = self.bays_x.checked_add(1).ok_or_else(|| too_large("baysX"))?;
        let lines_z = self.bays_z.checked_add(1).ok_or_else(|| too_large("baysZ"))?;
        let per_floor = lines_x.checked_mul(lines_z).ok_or_else(|| too_large("baysZ"))?;
        // Structural levels plus the ground layer
        self.stories
            .checked_add(2)
            .and_then(|levels| levels.checked_mul(per_floor))
            .and_then(|nodes| nodes.checked_mul(RECORDS_PER_NODE * mem::size_of::<Node>()))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(|| too_large("stories"))?;
        Ok(())
    }

    pub fn bay_width_x_in(&self) -> f64 {
        self.bay_width_x * INCHES_PER_FOOT
    }

    pub fn bay_width_z_in(&self) -> f64 {
        self.bay_width_z * INCHES_PER_FOOT
    }

    pub fn story_height_in(&self) -> f64 {
        self.story_height * INCHES_PER_FOOT
    }
}

impl Default for FrameParams {
    /// One 20 ft x 20 ft bay, one 15 ft story
    fn default() -> Self {
        Self::new(1, 1, 20.0, 20.0, 1, 15.0)
    }
}

fn check_count(field: &'static str, value: usize) -> GenResult<()> {
    if value == 0 {
        return Err(GenError::invalid(field, "must be at least 1"));
    }
    Ok(())
}

fn check_length(field: &'static str, value: f64) -> GenResult<()> {
    if !value.is_finite() {
        return Err(GenError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value <= 0.0 {
        return Err(GenError::invalid(field, format!("must be positive, got {}", value)));
    }
    Ok(())
}
