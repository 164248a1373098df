//! PostgreSQL Repository Implementation

use crate::domain::entities::{Combo, NewCombo};
use crate::domain::repository::ComboRepository;
use crate::domain::value_objects::{Author, ComboName, Frames};
use crate::error::ComboResult;
use chrono::{DateTime, Utc};
use kernel::id::ComboId;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

/// PostgreSQL-backed repository
///
/// `frames` lives in a JSONB column; id and timestamp come from column
/// defaults and are read back with `RETURNING`.
#[derive(Clone)]
pub struct PgComboRepository {
    pool: PgPool,
}

impl PgComboRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ComboRepository for PgComboRepository {
    async fn create(&self, combo: &NewCombo) -> ComboResult<Combo> {
        let row = sqlx::query_as::<_, ComboRow>(
            r#"
            INSERT INTO combos (name, author, frames)
            VALUES ($1, $2, $3)
            RETURNING combo_id, name, author, frames, created_at
            "#,
        )
        .bind(combo.name.as_str())
        .bind(combo.author.as_str())
        .bind(Json(&combo.frames))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_combo())
    }

    async fn list_all(&self) -> ComboResult<Vec<Combo>> {
        let rows = sqlx::query_as::<_, ComboRow>(
            r#"
            SELECT combo_id, name, author, frames, created_at
            FROM combos
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ComboRow::into_combo).collect())
    }

    async fn delete_by_id(&self, id: ComboId) -> ComboResult<()> {
        let deleted = sqlx::query("DELETE FROM combos WHERE combo_id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            tracing::debug!(combo_id = %id, "Combo already absent");
        }

        Ok(())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ComboRow {
    combo_id: Uuid,
    name: String,
    author: String,
    frames: Json<Vec<Value>>,
    created_at: DateTime<Utc>,
}

impl ComboRow {
    fn into_combo(self) -> Combo {
        Combo {
            id: ComboId::from_uuid(self.combo_id),
            name: ComboName::from_db(self.name),
            author: Author::new(self.author),
            frames: Frames::new(self.frames.0),
            created_at: self.created_at,
        }
    }
}
