use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::models::*;

use super::row_helpers::map_infrastructure_row;

const SELECT_INFRASTRUCTURE: &str = r#"
    SELECT i.id, i.name, i.shortname, i.isprimary, i.created_at, i.updated_at,
           COALESCE(COUNT(s.id), 0) as switch_count
    FROM infrastructures i
    LEFT JOIN switches s ON s.infrastructure_id = i.id
"#;

/// Infrastructure database operations
pub struct InfrastructureRepo;

impl InfrastructureRepo {
    pub async fn list(pool: &Pool<Sqlite>) -> Result<Vec<Infrastructure>> {
        let rows = sqlx::query(&format!("{} GROUP BY i.id ORDER BY i.name", SELECT_INFRASTRUCTURE))
            .fetch_all(pool)
            .await?;

        Ok(rows.iter().map(map_infrastructure_row).collect())
    }

    pub async fn get(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Infrastructure>> {
        let row = sqlx::query(&format!("{} WHERE i.id = ? GROUP BY i.id", SELECT_INFRASTRUCTURE))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.as_ref().map(map_infrastructure_row))
    }

    pub async fn create(pool: &Pool<Sqlite>, req: &CreateInfrastructureRequest) -> Result<Infrastructure> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO infrastructures (name, shortname, isprimary, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.name)
        .bind(&req.shortname)
        .bind(req.isprimary)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Self::get(pool, result.last_insert_rowid())
            .await?
            .context("Infrastructure not found after creation")
    }

    pub async fn delete(pool: &Pool<Sqlite>, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM infrastructures WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(super::NotFoundError::new("Infrastructure", &id.to_string()).into());
        }
        Ok(())
    }
}
