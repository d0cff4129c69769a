use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub mod categories;
pub mod events;
pub mod registrations;
pub mod tickets;
pub mod users;
pub mod venues;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "eventos-api",
    };

    Json(payload).into_response()
}
