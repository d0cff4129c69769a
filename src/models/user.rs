use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::require;
use crate::utils::error::AppError;
use crate::utils::time::serialize_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "role_enum", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organizer,
    Attendee,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    // Argon2 PHC string, never serialized to clients.
    #[serde(skip_serializing)]
    pub password: String,
    pub address: String,
    pub role: Role,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub role: Option<Role>,
}

/// A validated user ready for insertion; `password` is still plaintext here
/// and is hashed by the store.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub role: Role,
}

impl CreateUser {
    pub fn validate(self) -> Result<NewUser, AppError> {
        Ok(NewUser {
            name: require(self.name, "name")?,
            email: require(self.email, "email")?,
            password: require(self.password, "password")?,
            address: require(self.address, "address")?,
            role: self.role.unwrap_or(Role::Attendee),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub role: Option<Role>,
}
