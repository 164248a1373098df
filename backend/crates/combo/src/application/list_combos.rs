//! List Combos Use Case

use crate::domain::entities::Combo;
use crate::domain::repository::ComboRepository;
use crate::error::ComboResult;
use std::sync::Arc;

/// List Combos Use Case
pub struct ListCombosUseCase<R>
where
    R: ComboRepository,
{
    combo_repo: Arc<R>,
}

impl<R> ListCombosUseCase<R>
where
    R: ComboRepository,
{
    pub fn new(combo_repo: Arc<R>) -> Self {
        Self { combo_repo }
    }

    /// Every stored combo, newest first
    pub async fn execute(&self) -> ComboResult<Vec<Combo>> {
        let combos = self.combo_repo.list_all().await?;
        tracing::debug!(count = combos.len(), "Listed combos");
        Ok(combos)
    }
}
