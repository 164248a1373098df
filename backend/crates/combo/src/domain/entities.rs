//! Domain Entities
//!
//! Core business entities for the Combo domain.

use crate::domain::value_objects::{Author, ComboName, Frames};
use chrono::{DateTime, Utc};
use kernel::id::ComboId;
use serde::Serialize;

/// Combo entity - a named sequence of board frames as persisted
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
    #[serde(rename = "_id")]
    pub id: ComboId,
    pub name: ComboName,
    pub author: Author,
    pub frames: Frames,
    pub created_at: DateTime<Utc>,
}

/// A validated combo that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewCombo {
    pub name: ComboName,
    pub author: Author,
    pub frames: Frames,
}

impl NewCombo {
    pub fn new(name: ComboName, author: Author, frames: Frames) -> Self {
        Self {
            name,
            author,
            frames,
        }
    }

    /// Attach the store-assigned identity
    pub fn into_combo(self, id: ComboId, created_at: DateTime<Utc>) -> Combo {
        Combo {
            id,
            name: self.name,
            author: self.author,
            frames: self.frames,
            created_at,
        }
    }
}
