use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::models::*;

use super::row_helpers::map_switch_row;

const SELECT_SWITCH: &str = r#"
    SELECT s.id, s.hostname, s.name, s.ipv4addr, s.active, s.infrastructure_id, s.model,
           s.created_at, s.updated_at,
           v.id as vendor_id, v.name as vendor_name, v.shortname as vendor_shortname,
           c.id as cabinet_id, c.name as cabinet_name, c.colocation as cabinet_colocation,
           l.id as location_id, l.name as location_name, l.shortname as location_shortname
    FROM switches s
    LEFT JOIN vendors v ON v.id = s.vendor_id
    LEFT JOIN cabinets c ON c.id = s.cabinet_id
    LEFT JOIN locations l ON l.id = c.location_id
"#;

/// Switch database operations
pub struct SwitchRepo;

impl SwitchRepo {
    pub async fn list(pool: &Pool<Sqlite>) -> Result<Vec<Switch>> {
        let rows = sqlx::query(&format!("{} ORDER BY s.hostname", SELECT_SWITCH))
            .fetch_all(pool)
            .await?;

        Ok(rows.iter().map(map_switch_row).collect())
    }

    /// Switches of one infrastructure in creation order. The Nagios export
    /// derives its group order from this order.
    pub async fn list_by_infrastructure(pool: &Pool<Sqlite>, infrastructure_id: i64) -> Result<Vec<Switch>> {
        let rows = sqlx::query(&format!("{} WHERE s.infrastructure_id = ? ORDER BY s.id", SELECT_SWITCH))
            .bind(infrastructure_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.iter().map(map_switch_row).collect())
    }

    pub async fn get(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Switch>> {
        let row = sqlx::query(&format!("{} WHERE s.id = ?", SELECT_SWITCH))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.as_ref().map(map_switch_row))
    }

    pub async fn get_by_hostname(pool: &Pool<Sqlite>, hostname: &str) -> Result<Option<Switch>> {
        let row = sqlx::query(&format!("{} WHERE s.hostname = ?", SELECT_SWITCH))
            .bind(hostname)
            .fetch_optional(pool)
            .await?;

        Ok(row.as_ref().map(map_switch_row))
    }

    pub async fn create(pool: &Pool<Sqlite>, req: &CreateSwitchRequest) -> Result<Switch> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO switches (hostname, name, ipv4addr, active, infrastructure_id, vendor_id, model, cabinet_id,
                                  created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.hostname)
        .bind(&req.name)
        .bind(&req.ipv4addr)
        .bind(req.active)
        .bind(req.infrastructure_id)
        .bind(req.vendor_id)
        .bind(&req.model)
        .bind(req.cabinet_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Self::get(pool, result.last_insert_rowid())
            .await?
            .context("Switch not found after creation")
    }

    pub async fn update(pool: &Pool<Sqlite>, id: i64, req: &CreateSwitchRequest) -> Result<Switch> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE switches SET hostname = ?, name = ?, ipv4addr = ?, active = ?, infrastructure_id = ?,
                                vendor_id = ?, model = ?, cabinet_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&req.hostname)
        .bind(&req.name)
        .bind(&req.ipv4addr)
        .bind(req.active)
        .bind(req.infrastructure_id)
        .bind(req.vendor_id)
        .bind(&req.model)
        .bind(req.cabinet_id)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(super::NotFoundError::new("Switch", &id.to_string()).into());
        }

        Self::get(pool, id)
            .await?
            .context("Switch not found after update")
    }

    pub async fn delete(pool: &Pool<Sqlite>, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM switches WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(super::NotFoundError::new("Switch", &id.to_string()).into());
        }
        Ok(())
    }
}
