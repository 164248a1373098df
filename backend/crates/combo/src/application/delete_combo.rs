//! Delete Combo Use Case

use crate::domain::repository::ComboRepository;
use crate::error::{ComboError, ComboResult};
use kernel::id::ComboId;
use std::sync::Arc;

/// Delete Combo Use Case
pub struct DeleteComboUseCase<R>
where
    R: ComboRepository,
{
    combo_repo: Arc<R>,
}

impl<R> DeleteComboUseCase<R>
where
    R: ComboRepository,
{
    pub fn new(combo_repo: Arc<R>) -> Self {
        Self { combo_repo }
    }

    /// Delete by the raw path identifier
    ///
    /// An identifier that is not a UUID cannot address any record and is
    /// reported as a store-level error. A well-formed identifier that
    /// matches nothing succeeds.
    pub async fn execute(&self, raw_id: &str) -> ComboResult<()> {
        let id = ComboId::parse(raw_id)
            .map_err(|e| ComboError::MalformedId(e.input().to_string()))?;

        self.combo_repo.delete_by_id(id).await?;

        tracing::info!(combo_id = %id, "Combo deleted");
        Ok(())
    }
}
