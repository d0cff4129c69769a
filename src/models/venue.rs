use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::require;
use crate::utils::error::AppError;
use crate::utils::time::serialize_timestamp;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub capacity: i32,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateVenue {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub capacity: i32,
}

impl CreateVenue {
    pub fn validate(self) -> Result<NewVenue, AppError> {
        Ok(NewVenue {
            name: require(self.name, "name")?,
            address: require(self.address, "address")?,
            city: require(self.city, "city")?,
            country: require(self.country, "country")?,
            capacity: require(self.capacity, "capacity")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_fields_are_required() {
        for field in ["name", "address", "city", "country", "capacity"] {
            let mut create = CreateVenue {
                name: Some("Hall A".to_string()),
                address: Some("1 Main St".to_string()),
                city: Some("Metropolis".to_string()),
                country: Some("US".to_string()),
                capacity: Some(500),
            };
            match field {
                "name" => create.name = None,
                "address" => create.address = None,
                "city" => create.city = None,
                "country" => create.country = None,
                "capacity" => create.capacity = None,
                _ => unreachable!(),
            }
            let err = create.validate().unwrap_err();
            assert!(matches!(err, AppError::Validation(m) if m.ends_with(field)));
        }
    }
}
