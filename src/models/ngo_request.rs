//! NGO request model matching the frontend NgoRequest interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    Fulfilled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Fulfilled => "Fulfilled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(RequestStatus::Pending),
            "Fulfilled" => Some(RequestStatus::Fulfilled),
            _ => None,
        }
    }
}

/// A requirement submitted by an NGO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NgoRequest {
    pub id: String,
    pub ngo_name: String,
    pub contact_number: String,
    pub requirements: String,
    pub city: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating an NGO request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNgoRequest {
    pub ngo_name: String,
    pub contact_number: String,
    pub requirements: String,
    pub city: String,
}
