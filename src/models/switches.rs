use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Switch represents a monitored switch with its vendor and cabinet embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Switch {
    pub id: i64,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4addr: Option<String>,
    pub active: bool,
    pub infrastructure_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<VendorRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabinet: Option<CabinetRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRef {
    pub id: i64,
    pub name: String,
    pub shortname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetRef {
    pub id: i64,
    pub name: String,
    pub colocation: String,
    pub location: LocationRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: i64,
    pub name: String,
    pub shortname: String,
}

/// CreateSwitchRequest for creating and updating switches
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSwitchRequest {
    pub hostname: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ipv4addr: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub infrastructure_id: i64,
    #[serde(default)]
    pub vendor_id: Option<i64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub cabinet_id: Option<i64>,
}

fn default_active() -> bool {
    true
}
