use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::utils::time::serialize_timestamp;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct CreatedBody {
    pub message: String,
    pub id: i64,
}

#[derive(Serialize)]
pub struct UpdatedBody {
    pub message: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,
}

pub fn message_body(message: impl Into<String>) -> Json<MessageBody> {
    Json(MessageBody {
        message: message.into(),
    })
}

/// 201 with the assigned identity.
pub fn created(message: impl Into<String>, id: i64) -> Response {
    let body = CreatedBody {
        message: message.into(),
        id,
    };
    (StatusCode::CREATED, Json(body)).into_response()
}

/// 200 with a bare confirmation message.
pub fn message(text: impl Into<String>) -> Response {
    (StatusCode::OK, message_body(text)).into_response()
}

/// 200 confirmation echoing the refreshed updated_at.
pub fn updated(message: impl Into<String>, updated_at: NaiveDateTime) -> Response {
    let body = UpdatedBody {
        message: message.into(),
        updated_at,
    };
    (StatusCode::OK, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn created_body_shape() {
        let body = CreatedBody {
            message: "Usuario creado".to_string(),
            id: 7,
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["message"], "Usuario creado");
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn updated_body_formats_the_timestamp() {
        let updated_at = NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let body = UpdatedBody {
            message: "Lugar actualizado".to_string(),
            updated_at,
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["updated_at"], "2025-05-01 10:30:00");
    }
}
