//! In-Memory Repository Implementation
//!
//! Vec-backed store for tests and local development. Can be switched
//! offline to behave like an unreachable database.

use crate::domain::entities::{Combo, NewCombo};
use crate::domain::repository::ComboRepository;
use crate::error::{ComboError, ComboResult};
use chrono::Utc;
use kernel::id::ComboId;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Storage {
    // insertion order
    combos: Vec<Combo>,
    offline: bool,
}

/// In-memory combo store. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryComboRepository {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryComboRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every operation, as if the database never came up
    pub fn offline() -> Self {
        let repo = Self::new();
        repo.set_offline(true);
        repo
    }

    pub fn set_offline(&self, offline: bool) {
        match self.storage.write() {
            Ok(mut storage) => storage.offline = offline,
            Err(poisoned) => poisoned.into_inner().offline = offline,
        }
    }

    /// Number of stored combos, ignoring the offline switch
    pub fn len(&self) -> usize {
        self.storage
            .read()
            .map(|s| s.combos.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_online(storage: &Storage) -> ComboResult<()> {
        if storage.offline {
            Err(ComboError::Unavailable("in-memory store is offline".into()))
        } else {
            Ok(())
        }
    }
}

fn poisoned<T>(_: T) -> ComboError {
    ComboError::Unavailable("lock poisoned".into())
}

impl ComboRepository for InMemoryComboRepository {
    async fn create(&self, combo: &NewCombo) -> ComboResult<Combo> {
        let mut storage = self.storage.write().map_err(poisoned)?;
        Self::ensure_online(&storage)?;

        let combo = combo.clone().into_combo(ComboId::new(), Utc::now());
        storage.combos.push(combo.clone());
        Ok(combo)
    }

    async fn list_all(&self) -> ComboResult<Vec<Combo>> {
        let storage = self.storage.read().map_err(poisoned)?;
        Self::ensure_online(&storage)?;

        // Reverse first so equal timestamps keep newest-inserted first
        let mut combos: Vec<Combo> = storage.combos.iter().rev().cloned().collect();
        combos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(combos)
    }

    async fn delete_by_id(&self, id: ComboId) -> ComboResult<()> {
        let mut storage = self.storage.write().map_err(poisoned)?;
        Self::ensure_online(&storage)?;

        storage.combos.retain(|c| c.id != id);
        Ok(())
    }
}
