mod infrastructures;
mod locations;
pub(crate) mod row_helpers;
mod seeds;
mod switches;
mod vendors;

use anyhow::{Context, Result};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

use crate::models::*;

/// Typed error for "resource not found", downcast by the API error layer
/// in the API error handler instead of fragile string matching.
#[derive(Debug)]
pub struct NotFoundError {
    pub resource: String,
    pub id: String,
}

impl NotFoundError {
    pub fn new(resource: &str, id: &str) -> Self {
        Self {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} not found: {}", self.resource, self.id)
    }
}

impl std::error::Error for NotFoundError {}

/// Store handles all database operations, delegating to per-entity repo modules.
#[derive(Clone)]
pub struct Store {
    pool: Pool<Sqlite>,
}

impl Store {
    /// Create a new database store with a specific pool size
    pub async fn with_pool_size(db_path: &str, max_connections: u32) -> Result<Self> {
        let db_url = format!("sqlite:{}?mode=rwc", db_path);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&db_url)
            .await
            .context("Failed to connect to database")?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Create a throwaway in-memory store. A single connection that never
    /// expires keeps the database alive for the lifetime of the pool.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Run database migrations
    async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;

        self.seed_default_vendors().await?;
        Ok(())
    }

    async fn seed_default_vendors(&self) -> Result<()> {
        for vendor in seeds::default_vendors() {
            sqlx::query(
                r#"
                INSERT INTO vendors (name, shortname, created_at, updated_at)
                SELECT ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP
                WHERE NOT EXISTS (SELECT 1 FROM vendors WHERE shortname = ? OR name = ?)
                "#,
            )
            .bind(vendor.name)
            .bind(vendor.shortname)
            .bind(vendor.shortname)
            .bind(vendor.name)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    // ========== Infrastructure Operations ==========

    pub async fn list_infrastructures(&self) -> Result<Vec<Infrastructure>> {
        infrastructures::InfrastructureRepo::list(&self.pool).await
    }

    pub async fn get_infrastructure(&self, id: i64) -> Result<Option<Infrastructure>> {
        infrastructures::InfrastructureRepo::get(&self.pool, id).await
    }

    pub async fn create_infrastructure(&self, req: &CreateInfrastructureRequest) -> Result<Infrastructure> {
        infrastructures::InfrastructureRepo::create(&self.pool, req).await
    }

    pub async fn delete_infrastructure(&self, id: i64) -> Result<()> {
        infrastructures::InfrastructureRepo::delete(&self.pool, id).await
    }

    // ========== Location Operations ==========

    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        locations::LocationRepo::list(&self.pool).await
    }

    pub async fn get_location(&self, id: i64) -> Result<Option<Location>> {
        locations::LocationRepo::get(&self.pool, id).await
    }

    pub async fn create_location(&self, req: &CreateLocationRequest) -> Result<Location> {
        locations::LocationRepo::create(&self.pool, req).await
    }

    // ========== Cabinet Operations ==========

    pub async fn list_cabinets(&self) -> Result<Vec<Cabinet>> {
        locations::CabinetRepo::list(&self.pool).await
    }

    pub async fn get_cabinet(&self, id: i64) -> Result<Option<Cabinet>> {
        locations::CabinetRepo::get(&self.pool, id).await
    }

    pub async fn create_cabinet(&self, req: &CreateCabinetRequest) -> Result<Cabinet> {
        locations::CabinetRepo::create(&self.pool, req).await
    }

    // ========== Vendor Operations ==========

    pub async fn list_vendors(&self) -> Result<Vec<Vendor>> {
        vendors::VendorRepo::list(&self.pool).await
    }

    pub async fn get_vendor(&self, id: i64) -> Result<Option<Vendor>> {
        vendors::VendorRepo::get(&self.pool, id).await
    }

    pub async fn get_vendor_by_shortname(&self, shortname: &str) -> Result<Option<Vendor>> {
        vendors::VendorRepo::get_by_shortname(&self.pool, shortname).await
    }

    pub async fn create_vendor(&self, req: &CreateVendorRequest) -> Result<Vendor> {
        vendors::VendorRepo::create(&self.pool, req).await
    }

    // ========== Switch Operations ==========

    pub async fn list_switches(&self) -> Result<Vec<Switch>> {
        switches::SwitchRepo::list(&self.pool).await
    }

    pub async fn list_switches_by_infrastructure(&self, infrastructure_id: i64) -> Result<Vec<Switch>> {
        switches::SwitchRepo::list_by_infrastructure(&self.pool, infrastructure_id).await
    }

    pub async fn get_switch(&self, id: i64) -> Result<Option<Switch>> {
        switches::SwitchRepo::get(&self.pool, id).await
    }

    pub async fn get_switch_by_hostname(&self, hostname: &str) -> Result<Option<Switch>> {
        switches::SwitchRepo::get_by_hostname(&self.pool, hostname).await
    }

    pub async fn create_switch(&self, req: &CreateSwitchRequest) -> Result<Switch> {
        switches::SwitchRepo::create(&self.pool, req).await
    }

    pub async fn update_switch(&self, id: i64, req: &CreateSwitchRequest) -> Result<Switch> {
        switches::SwitchRepo::update(&self.pool, id, req).await
    }

    pub async fn delete_switch(&self, id: i64) -> Result<()> {
        switches::SwitchRepo::delete(&self.pool, id).await
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Two locations, one cabinet each, and three switches on one
    /// infrastructure: two active, one disabled.
    pub async fn seed_inventory(store: &Store) -> Infrastructure {
        let infra = store
            .create_infrastructure(&CreateInfrastructureRequest {
                name: "Peering LAN 1".into(),
                shortname: "lan1".into(),
                isprimary: true,
            })
            .await
            .unwrap();

        let ld5 = store
            .create_location(&CreateLocationRequest { name: "Equinix LD5".into(), shortname: "LD5".into() })
            .await
            .unwrap();
        let th2 = store
            .create_location(&CreateLocationRequest { name: "Telehouse North 2".into(), shortname: "THN2".into() })
            .await
            .unwrap();

        let cab_ld5 = store
            .create_cabinet(&CreateCabinetRequest { name: "R101".into(), colocation: "Equinix".into(), location_id: ld5.id })
            .await
            .unwrap();
        let cab_th2 = store
            .create_cabinet(&CreateCabinetRequest { name: "C22".into(), colocation: "Telehouse".into(), location_id: th2.id })
            .await
            .unwrap();

        let cisco = store.get_vendor_by_shortname("Cisco").await.unwrap().unwrap();
        let arista = store.get_vendor_by_shortname("Arista").await.unwrap().unwrap();

        for (hostname, vendor_id, model, cabinet_id, ip, active) in [
            ("swi2-ld5", cisco.id, "C9300 48P", cab_ld5.id, "192.0.2.2", true),
            ("swi1-thn2", arista.id, "7280SR", cab_th2.id, "192.0.2.3", true),
            ("swi9-ld5", cisco.id, "C9300 48P", cab_ld5.id, "192.0.2.9", false),
        ] {
            store
                .create_switch(&CreateSwitchRequest {
                    hostname: hostname.into(),
                    name: Some(hostname.to_uppercase()),
                    ipv4addr: Some(ip.into()),
                    active,
                    infrastructure_id: infra.id,
                    vendor_id: Some(vendor_id),
                    model: Some(model.into()),
                    cabinet_id: Some(cabinet_id),
                })
                .await
                .unwrap();
        }

        infra
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_vendors_seeded_once() {
        let store = Store::in_memory().await.unwrap();
        let before = store.list_vendors().await.unwrap().len();
        store.seed_default_vendors().await.unwrap();
        let after = store.list_vendors().await.unwrap();
        assert_eq!(before, after.len());
        assert!(after.iter().any(|v| v.shortname == "Cisco"));
    }

    #[tokio::test]
    async fn test_switch_graph_is_embedded() {
        let store = Store::in_memory().await.unwrap();
        let infra = fixtures::seed_inventory(&store).await;

        let switches = store.list_switches_by_infrastructure(infra.id).await.unwrap();
        let hostnames: Vec<_> = switches.iter().map(|s| s.hostname.as_str()).collect();
        assert_eq!(hostnames, vec!["swi2-ld5", "swi1-thn2", "swi9-ld5"]);

        let first = &switches[0];
        assert!(first.active);
        assert_eq!(first.vendor.as_ref().unwrap().shortname, "Cisco");
        let cabinet = first.cabinet.as_ref().unwrap();
        assert_eq!(cabinet.colocation, "Equinix");
        assert_eq!(cabinet.location.shortname, "LD5");
        assert_eq!(cabinet.location.name, "Equinix LD5");
        assert!(!switches[2].active);
    }

    #[tokio::test]
    async fn test_switch_without_vendor_or_cabinet() {
        let store = Store::in_memory().await.unwrap();
        let infra = fixtures::seed_inventory(&store).await;

        let sw = store
            .create_switch(&CreateSwitchRequest {
                hostname: "bare".into(),
                name: None,
                ipv4addr: None,
                active: true,
                infrastructure_id: infra.id,
                vendor_id: None,
                model: None,
                cabinet_id: None,
            })
            .await
            .unwrap();

        assert!(sw.vendor.is_none());
        assert!(sw.cabinet.is_none());
        assert!(sw.ipv4addr.is_none());
        assert_eq!(store.get_infrastructure(infra.id).await.unwrap().unwrap().switch_count, Some(4));
    }

    #[tokio::test]
    async fn test_update_and_delete_switch() {
        let store = Store::in_memory().await.unwrap();
        let infra = fixtures::seed_inventory(&store).await;
        let sw = store.get_switch_by_hostname("swi9-ld5").await.unwrap().unwrap();

        let req = CreateSwitchRequest {
            hostname: sw.hostname.clone(),
            name: sw.name.clone(),
            ipv4addr: sw.ipv4addr.clone(),
            active: true,
            infrastructure_id: infra.id,
            vendor_id: sw.vendor.as_ref().map(|v| v.id),
            model: sw.model.clone(),
            cabinet_id: sw.cabinet.as_ref().map(|c| c.id),
        };
        let updated = store.update_switch(sw.id, &req).await.unwrap();
        assert!(updated.active);

        store.delete_switch(sw.id).await.unwrap();
        assert!(store.get_switch(sw.id).await.unwrap().is_none());

        let err = store.delete_switch(sw.id).await.unwrap_err();
        assert!(err.downcast_ref::<NotFoundError>().is_some());
    }

    #[tokio::test]
    async fn test_delete_infrastructure_cascades() {
        let store = Store::in_memory().await.unwrap();
        let infra = fixtures::seed_inventory(&store).await;

        store.delete_infrastructure(infra.id).await.unwrap();
        assert!(store.list_switches().await.unwrap().is_empty());
        assert!(store.get_infrastructure(infra.id).await.unwrap().is_none());
    }
}
