//! Domain Value Objects
//!
//! Immutable value types for the Combo domain.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Author recorded when the client does not send one
pub const DEFAULT_AUTHOR: &str = "Coach";

/// Combo name - required and non-empty
///
/// Duplicates are allowed; the name is a label, not a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComboName(String);

impl ComboName {
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() { None } else { Some(Self(name)) }
    }

    /// Create from a stored value (the table's CHECK constraint already holds)
    pub fn from_db(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ComboName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author of a combo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }

    /// Use the given author, or [`DEFAULT_AUTHOR`] when absent
    pub fn or_default(author: Option<String>) -> Self {
        author.map(Self).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for Author {
    fn default() -> Self {
        Self(DEFAULT_AUTHOR.to_string())
    }
}

/// Ordered board-position snapshots
///
/// Each frame is stored exactly as the client sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frames(Vec<Value>);

impl Frames {
    pub fn new(frames: Vec<Value>) -> Self {
        Self(frames)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Frames {
    fn from(frames: Vec<Value>) -> Self {
        Self(frames)
    }
}
