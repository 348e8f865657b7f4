//! WASM bindings for the frame generator
//!
//! Lets a browser front end build models in-process. Every entry point
//! takes and returns JSON strings.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::GenResult;
use crate::generator::FrameGenerator;
use crate::model::ModelDocument;
use crate::options::GeneratorOptions;
use crate::params::FrameParams;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    params: FrameParams,
    #[serde(default)]
    options: GeneratorOptions,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<ModelDocument>,
}

impl GenerateResponse {
    fn from_result(result: GenResult<ModelDocument>) -> Self {
        match result {
            Ok(model) => Self {
                success: true,
                error: None,
                model: Some(model),
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }

    fn failure(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
            model: None,
        }
    }

    fn into_json(self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|e| {
            format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
        })
    }
}

/// Generate a model from a frame parameter record with default options
///
/// Returns `{"success": true, "model": {...}}` or
/// `{"success": false, "error": "..."}`.
#[wasm_bindgen]
pub fn generate(params_json: &str) -> String {
    let response = match serde_json::from_str::<FrameParams>(params_json) {
        Ok(params) => GenerateResponse::from_result(FrameGenerator::new().generate(&params)),
        Err(e) => GenerateResponse::failure(format!("Failed to parse parameters: {}", e)),
    };
    response.into_json()
}

/// Generate a model from `{"params": {...}, "options": {...}}`
#[wasm_bindgen]
pub fn generate_with_options(request_json: &str) -> String {
    let response = match serde_json::from_str::<GenerateRequest>(request_json) {
        Ok(request) => GenerateResponse::from_result(
            FrameGenerator::with_options(request.options).generate(&request.params),
        ),
        Err(e) => GenerateResponse::failure(format!("Failed to parse request: {}", e)),
    };
    response.into_json()
}

/// Get the version of the generator
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
