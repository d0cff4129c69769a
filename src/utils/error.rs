use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::utils::response::message_body;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Error de base de datos: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => {
                error!(error = ?self, message = %msg, "Request failed");
            }
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
            }
            AppError::Internal(msg) => {
                error!(message = %msg, "Internal error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        self.log();

        // The client body is a single human-readable message; storage errors
        // carry the underlying driver text.
        (status, message_body(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_status_codes() {
        let validation = AppError::Validation("Campo obligatorio faltante: name".to_string());
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let not_found = AppError::NotFound("Usuario no encontrado".to_string());
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let database = AppError::Database(sqlx::Error::PoolClosed);
        assert_eq!(database.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_errors_expose_the_driver_text() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Error de base de datos:"));
        assert!(rendered.len() > "Error de base de datos: ".len());
    }

    #[test]
    fn responses_carry_the_mapped_status() {
        let response = AppError::NotFound("Evento no encontrado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
