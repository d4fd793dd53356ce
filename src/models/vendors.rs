use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vendor represents a network equipment manufacturer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub shortname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// CreateVendorRequest for creating new vendors
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendorRequest {
    pub name: String,
    pub shortname: String,
}
