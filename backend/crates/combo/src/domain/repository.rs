//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the infra layer.

use crate::domain::entities::{Combo, NewCombo};
use crate::error::ComboResult;
use kernel::id::ComboId;

/// Combo repository trait
///
/// Every call round-trips to the store; implementations keep no cache.
#[trait_variant::make(ComboRepository: Send)]
pub trait LocalComboRepository {
    /// Persist a combo, letting the store assign its id and timestamp
    async fn create(&self, combo: &NewCombo) -> ComboResult<Combo>;

    /// All combos, newest first
    async fn list_all(&self) -> ComboResult<Vec<Combo>>;

    /// Remove a combo; succeeds when it does not exist
    async fn delete_by_id(&self, id: ComboId) -> ComboResult<()>;
}
