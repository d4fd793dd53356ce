use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Infrastructure is a monitored switching fabric (e.g. a peering LAN)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Infrastructure {
    pub id: i64,
    pub name: String,
    pub shortname: String,
    pub isprimary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// CreateInfrastructureRequest for creating new infrastructures
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInfrastructureRequest {
    pub name: String,
    pub shortname: String,
    #[serde(default)]
    pub isprimary: bool,
}
