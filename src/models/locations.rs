use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location is a point of presence housing one or more cabinets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub shortname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabinet_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub shortname: String,
}

/// Cabinet is a rack inside a colocation facility at a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: i64,
    pub name: String,
    pub colocation: String,
    pub location_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCabinetRequest {
    pub name: String,
    pub colocation: String,
    pub location_id: i64,
}
