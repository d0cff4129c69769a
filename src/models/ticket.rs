use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::require;
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub registration_id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub price: f64,
    // entradas keep chrono's raw encoding for created_at/updated_at, unlike
    // every other resource
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateTicket {
    pub registration_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug)]
pub struct NewTicket {
    pub registration_id: i64,
    pub kind: String,
    pub price: f64,
}

impl CreateTicket {
    pub fn validate(self) -> Result<NewTicket, AppError> {
        Ok(NewTicket {
            registration_id: require(self.registration_id, "registration_id")?,
            kind: require(self.kind, "type")?,
            price: require(self.price, "price")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTicket {
    pub registration_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<f64>,
}
