//! Create Combo Use Case

use crate::domain::entities::{Combo, NewCombo};
use crate::domain::repository::ComboRepository;
use crate::domain::value_objects::{Author, ComboName, Frames};
use crate::error::{ComboError, ComboResult};
use serde_json::Value;
use std::sync::Arc;

/// Input DTO for create combo
///
/// Fields are optional here so that a missing field is reported as a
/// validation failure instead of a parse failure.
#[derive(Debug, Clone, Default)]
pub struct CreateComboInput {
    pub name: Option<String>,
    pub author: Option<String>,
    pub frames: Option<Vec<Value>>,
}

/// Create Combo Use Case
pub struct CreateComboUseCase<R>
where
    R: ComboRepository,
{
    combo_repo: Arc<R>,
}

impl<R> CreateComboUseCase<R>
where
    R: ComboRepository,
{
    pub fn new(combo_repo: Arc<R>) -> Self {
        Self { combo_repo }
    }

    pub async fn execute(&self, input: CreateComboInput) -> ComboResult<Combo> {
        let new_combo = validate(input)?;

        let combo = self.combo_repo.create(&new_combo).await?;

        tracing::info!(
            combo_id = %combo.id,
            frames = combo.frames.len(),
            "Combo created"
        );

        Ok(combo)
    }
}

/// Check required fields and apply the author default
fn validate(input: CreateComboInput) -> ComboResult<NewCombo> {
    let name = input
        .name
        .ok_or_else(|| ComboError::Validation("name is required".to_string()))?;
    let name = ComboName::new(name)
        .ok_or_else(|| ComboError::Validation("name must not be empty".to_string()))?;
    let frames = input
        .frames
        .ok_or_else(|| ComboError::Validation("frames is required".to_string()))?;

    let author = Author::or_default(input.author);

    // The store cannot hold U+0000 in text or JSON
    if name.as_str().contains('\0') {
        return Err(ComboError::Validation(
            "name must not contain NUL characters".to_string(),
        ));
    }
    if author.as_str().contains('\0') {
        return Err(ComboError::Validation(
            "author must not contain NUL characters".to_string(),
        ));
    }
    if frames.iter().any(contains_nul) {
        return Err(ComboError::Validation(
            "frames must not contain NUL characters".to_string(),
        ));
    }

    Ok(NewCombo::new(name, author, Frames::new(frames)))
}

/// Whether any string or object key inside `value` holds U+0000
fn contains_nul(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains('\0'),
        Value::Array(items) => items.iter().any(contains_nul),
        Value::Object(map) => map
            .iter()
            .any(|(key, item)| key.contains('\0') || contains_nul(item)),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}
