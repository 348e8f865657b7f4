//! Nodal restraint conditions

use serde::{Deserialize, Serialize};

/// Restraint flags at a node, ordered [TX, TY, TZ, RX, RY, RZ]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restraint(pub [bool; 6]);

impl Restraint {
    /// No DOFs restrained
    pub fn free() -> Self {
        Self([false; 6])
    }

    /// All DOFs restrained
    pub fn fixed() -> Self {
        Self([true; 6])
    }

    pub fn is_fixed(&self) -> bool {
        self.0.iter().all(|&r| r)
    }

    pub fn is_free(&self) -> bool {
        self.0.iter().all(|&r| !r)
    }
}
