use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::require;
use crate::utils::error::AppError;
use crate::utils::time::serialize_timestamp;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl CreateCategory {
    pub fn validate(self) -> Result<NewCategory, AppError> {
        Ok(NewCategory {
            name: require(self.name, "name")?,
            description: self.description.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}
