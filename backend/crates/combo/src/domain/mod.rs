//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Combo, NewCombo)
//! - Domain value objects (ComboName, Author, Frames)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
