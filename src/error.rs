//! Error types for the frame generator

use thiserror::Error;

/// Main error type for model generation
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error(
        "Ground node ids would collide: structural node ids reach {max_structural_id}, \
         which is not below the ground node offset {offset}"
    )]
    GroundNodeIdOverflow { max_structural_id: usize, offset: usize },

    #[error("Model integrity violated: {0}")]
    IntegrityViolation(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GenError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for generator operations
pub type GenResult<T> = Result<T, GenError>;
