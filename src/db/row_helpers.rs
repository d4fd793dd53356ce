use sqlx::{Row, sqlite::SqliteRow};

use crate::models::*;

/// Filter empty strings to None; the DB may store '' instead of NULL
pub fn none_if_empty(opt: Option<String>) -> Option<String> {
    opt.filter(|s| !s.is_empty())
}

/// Map a SQLite row to an Infrastructure struct
pub fn map_infrastructure_row(row: &SqliteRow) -> Infrastructure {
    let isprimary: i32 = row.get("isprimary");
    Infrastructure {
        id: row.get("id"),
        name: row.get("name"),
        shortname: row.get("shortname"),
        isprimary: isprimary != 0,
        switch_count: Some(row.get("switch_count")),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Map a SQLite row to a Location struct
pub fn map_location_row(row: &SqliteRow) -> Location {
    Location {
        id: row.get("id"),
        name: row.get("name"),
        shortname: row.get("shortname"),
        cabinet_count: Some(row.get("cabinet_count")),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Map a SQLite row to a Cabinet struct
pub fn map_cabinet_row(row: &SqliteRow) -> Cabinet {
    Cabinet {
        id: row.get("id"),
        name: row.get("name"),
        colocation: row.get("colocation"),
        location_id: row.get("location_id"),
        location_name: none_if_empty(row.get("location_name")),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Map a SQLite row to a Vendor struct
pub fn map_vendor_row(row: &SqliteRow) -> Vendor {
    Vendor {
        id: row.get("id"),
        name: row.get("name"),
        shortname: row.get("shortname"),
        switch_count: Some(row.get("switch_count")),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Map a SQLite row to a Switch struct, rebuilding the vendor and
/// cabinet -> location graph from the LEFT JOIN columns
pub fn map_switch_row(row: &SqliteRow) -> Switch {
    let active: i32 = row.get("active");

    let vendor = row
        .get::<Option<i64>, _>("vendor_id")
        .map(|id| VendorRef {
            id,
            name: row.get("vendor_name"),
            shortname: row.get("vendor_shortname"),
        });

    let cabinet = row
        .get::<Option<i64>, _>("cabinet_id")
        .map(|id| CabinetRef {
            id,
            name: row.get("cabinet_name"),
            colocation: row.get("cabinet_colocation"),
            location: LocationRef {
                id: row.get("location_id"),
                name: row.get("location_name"),
                shortname: row.get("location_shortname"),
            },
        });

    Switch {
        id: row.get("id"),
        hostname: row.get("hostname"),
        name: none_if_empty(row.get("name")),
        ipv4addr: none_if_empty(row.get("ipv4addr")),
        active: active != 0,
        infrastructure_id: row.get("infrastructure_id"),
        model: none_if_empty(row.get("model")),
        vendor,
        cabinet,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
