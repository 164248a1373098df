//! API DTOs (Data Transfer Objects)
//!
//! Every response carries `success`; failures are rendered by
//! `kernel::error::AppError`.

use crate::domain::entities::Combo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request for POST /api/combos
///
/// All fields are optional at the wire level; presence is checked by the
/// create use case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComboRequest {
    pub name: Option<String>,
    pub author: Option<String>,
    pub frames: Option<Vec<Value>>,
}

/// Response for POST /api/combos
#[derive(Debug, Clone, Serialize)]
pub struct CreateComboResponse {
    pub success: bool,
    pub combo: Combo,
}

impl CreateComboResponse {
    pub fn new(combo: Combo) -> Self {
        Self {
            success: true,
            combo,
        }
    }
}

/// Response for GET /api/combos
#[derive(Debug, Clone, Serialize)]
pub struct ListCombosResponse {
    pub success: bool,
    pub combos: Vec<Combo>,
}

impl ListCombosResponse {
    pub fn new(combos: Vec<Combo>) -> Self {
        Self {
            success: true,
            combos,
        }
    }
}

/// Response for DELETE /api/combos/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DeleteComboResponse {
    pub success: bool,
}

impl DeleteComboResponse {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for DeleteComboResponse {
    fn default() -> Self {
        Self::new()
    }
}
