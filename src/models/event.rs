use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::require;
use crate::utils::error::AppError;
use crate::utils::time::{parse_timestamp, serialize_timestamp};

pub const DEFAULT_STATUS: &str = "active";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub organizer_id: i64,
    pub title: String,
    pub description: String,
    // start/end keep chrono's ISO-8601 encoding on the wire
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub place_id: i64,
    pub category_id: i64,
    pub status: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub organizer_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub place_id: Option<i64>,
    pub category_id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug)]
pub struct NewEvent {
    pub organizer_id: i64,
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub place_id: i64,
    pub category_id: i64,
    pub status: String,
}

impl CreateEvent {
    pub fn validate(self) -> Result<NewEvent, AppError> {
        let start_raw = require(self.start_time, "start_time")?;
        let end_raw = require(self.end_time, "end_time")?;
        Ok(NewEvent {
            organizer_id: require(self.organizer_id, "organizer_id")?,
            title: require(self.title, "title")?,
            description: self.description.unwrap_or_default(),
            start_time: parse_timestamp("start_time", &start_raw)?,
            end_time: parse_timestamp("end_time", &end_raw)?,
            place_id: require(self.place_id, "place_id")?,
            category_id: require(self.category_id, "category_id")?,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    pub organizer_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub place_id: Option<i64>,
    pub category_id: Option<i64>,
    pub status: Option<String>,
}

/// Update payload with its timestamp strings already parsed.
#[derive(Debug)]
pub struct EventPatch {
    pub organizer_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub place_id: Option<i64>,
    pub category_id: Option<i64>,
    pub status: Option<String>,
}

impl UpdateEvent {
    pub fn validate(self) -> Result<EventPatch, AppError> {
        let start_time = match self.start_time {
            Some(raw) => Some(parse_timestamp("start_time", &raw)?),
            None => None,
        };
        let end_time = match self.end_time {
            Some(raw) => Some(parse_timestamp("end_time", &raw)?),
            None => None,
        };
        Ok(EventPatch {
            organizer_id: self.organizer_id,
            title: self.title,
            description: self.description,
            start_time,
            end_time,
            place_id: self.place_id,
            category_id: self.category_id,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateEvent {
        CreateEvent {
            organizer_id: Some(1),
            title: Some("RustConf".to_string()),
            description: None,
            start_time: Some("2025-05-01T10:00:00".to_string()),
            end_time: Some("2025-05-01T18:00:00".to_string()),
            place_id: Some(2),
            category_id: Some(3),
            status: None,
        }
    }

    #[test]
    fn applies_defaults_for_optional_fields() {
        let new = payload().validate().unwrap();
        assert_eq!(new.description, "");
        assert_eq!(new.status, DEFAULT_STATUS);
    }

    #[test]
    fn missing_required_field_names_it() {
        let mut create = payload();
        create.place_id = None;
        let err = create.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.ends_with("place_id")));
    }

    #[test]
    fn malformed_start_time_is_a_validation_error() {
        let mut create = payload();
        create.start_time = Some("mañana".to_string());
        let err = create.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m.contains("start_time")));
    }

    #[test]
    fn update_parses_only_supplied_timestamps() {
        let patch = UpdateEvent {
            organizer_id: None,
            title: None,
            description: None,
            start_time: None,
            end_time: Some("2025-05-02 18:00:00".to_string()),
            place_id: None,
            category_id: None,
            status: None,
        }
        .validate()
        .unwrap();
        assert!(patch.start_time.is_none());
        assert!(patch.end_time.is_some());
    }

    #[test]
    fn serializes_start_and_end_in_iso_format() {
        let start = chrono::NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let event = Event {
            id: 1,
            organizer_id: 1,
            title: "RustConf".to_string(),
            description: String::new(),
            start_time: start,
            end_time: start,
            place_id: 2,
            category_id: 3,
            status: DEFAULT_STATUS.to_string(),
            created_at: start,
            updated_at: start,
        };
        let value = serde_json::to_value(event).unwrap();
        assert_eq!(value["start_time"], "2025-05-01T10:00:00");
        assert_eq!(value["created_at"], "2025-05-01 10:00:00");
    }
}
