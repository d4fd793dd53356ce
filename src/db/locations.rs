use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::models::*;

use super::row_helpers::{map_cabinet_row, map_location_row};

// ========== Location Repo ==========

const SELECT_LOCATION: &str = r#"
    SELECT l.id, l.name, l.shortname, l.created_at, l.updated_at,
           COALESCE(COUNT(c.id), 0) as cabinet_count
    FROM locations l
    LEFT JOIN cabinets c ON c.location_id = l.id
"#;

pub struct LocationRepo;

impl LocationRepo {
    pub async fn list(pool: &Pool<Sqlite>) -> Result<Vec<Location>> {
        let rows = sqlx::query(&format!("{} GROUP BY l.id ORDER BY l.name", SELECT_LOCATION))
            .fetch_all(pool)
            .await?;
        Ok(rows.iter().map(map_location_row).collect())
    }

    pub async fn get(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Location>> {
        let row = sqlx::query(&format!("{} WHERE l.id = ? GROUP BY l.id", SELECT_LOCATION))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.as_ref().map(map_location_row))
    }

    pub async fn create(pool: &Pool<Sqlite>, req: &CreateLocationRequest) -> Result<Location> {
        let now = Utc::now();
        let result = sqlx::query("INSERT INTO locations (name, shortname, created_at, updated_at) VALUES (?, ?, ?, ?)")
            .bind(&req.name).bind(&req.shortname).bind(now).bind(now)
            .execute(pool).await?;
        Self::get(pool, result.last_insert_rowid()).await?.context("Location not found after creation")
    }
}

// ========== Cabinet Repo ==========

const SELECT_CABINET: &str = r#"
    SELECT c.id, c.name, c.colocation, c.location_id, c.created_at, c.updated_at,
           l.name as location_name
    FROM cabinets c
    LEFT JOIN locations l ON l.id = c.location_id
"#;

pub struct CabinetRepo;

impl CabinetRepo {
    pub async fn list(pool: &Pool<Sqlite>) -> Result<Vec<Cabinet>> {
        let rows = sqlx::query(&format!("{} ORDER BY l.name, c.name", SELECT_CABINET))
            .fetch_all(pool)
            .await?;
        Ok(rows.iter().map(map_cabinet_row).collect())
    }

    pub async fn get(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Cabinet>> {
        let row = sqlx::query(&format!("{} WHERE c.id = ?", SELECT_CABINET))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.as_ref().map(map_cabinet_row))
    }

    pub async fn create(pool: &Pool<Sqlite>, req: &CreateCabinetRequest) -> Result<Cabinet> {
        let now = Utc::now();
        let result = sqlx::query("INSERT INTO cabinets (name, colocation, location_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)")
            .bind(&req.name).bind(&req.colocation).bind(req.location_id).bind(now).bind(now)
            .execute(pool).await?;
        Self::get(pool, result.last_insert_rowid()).await?.context("Cabinet not found after creation")
    }
}
