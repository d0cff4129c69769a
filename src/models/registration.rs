use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::require;
use crate::utils::error::AppError;
use crate::utils::time::serialize_timestamp;

pub const DEFAULT_STATUS: &str = "registered";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Registration {
    pub id: i64,
    // event_id and assistant_id are not enforced references
    pub event_id: i64,
    pub assistant_id: i64,
    pub status: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateRegistration {
    pub event_id: Option<i64>,
    pub assistant_id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug)]
pub struct NewRegistration {
    pub event_id: i64,
    pub assistant_id: i64,
    pub status: String,
}

impl CreateRegistration {
    pub fn validate(self) -> Result<NewRegistration, AppError> {
        Ok(NewRegistration {
            event_id: require(self.event_id, "event_id")?,
            assistant_id: require(self.assistant_id, "assistant_id")?,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRegistration {
    pub event_id: Option<i64>,
    pub assistant_id: Option<i64>,
    pub status: Option<String>,
}
