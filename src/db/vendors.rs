use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::models::*;

use super::row_helpers::map_vendor_row;

const SELECT_VENDOR: &str = r#"
    SELECT v.id, v.name, v.shortname, v.created_at, v.updated_at,
           COALESCE(COUNT(s.id), 0) as switch_count
    FROM vendors v
    LEFT JOIN switches s ON s.vendor_id = v.id
"#;

/// Vendor database operations
pub struct VendorRepo;

impl VendorRepo {
    pub async fn list(pool: &Pool<Sqlite>) -> Result<Vec<Vendor>> {
        let rows = sqlx::query(&format!("{} GROUP BY v.id ORDER BY v.name", SELECT_VENDOR))
            .fetch_all(pool)
            .await?;

        Ok(rows.iter().map(map_vendor_row).collect())
    }

    pub async fn get(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Vendor>> {
        let row = sqlx::query(&format!("{} WHERE v.id = ? GROUP BY v.id", SELECT_VENDOR))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.as_ref().map(map_vendor_row))
    }

    pub async fn get_by_shortname(pool: &Pool<Sqlite>, shortname: &str) -> Result<Option<Vendor>> {
        let row = sqlx::query(&format!("{} WHERE v.shortname = ? GROUP BY v.id", SELECT_VENDOR))
            .bind(shortname)
            .fetch_optional(pool)
            .await?;

        Ok(row.as_ref().map(map_vendor_row))
    }

    pub async fn create(pool: &Pool<Sqlite>, req: &CreateVendorRequest) -> Result<Vendor> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO vendors (name, shortname, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&req.name)
        .bind(&req.shortname)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Self::get(pool, result.last_insert_rowid())
            .await?
            .context("Vendor not found after creation")
    }
}
