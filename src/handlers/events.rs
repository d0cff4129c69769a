use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response;

pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Event>>, AppError> {
    let events = store::events::list(&pool).await?;
    Ok(Json(events))
}

pub async fn get(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Json<Event>, AppError> {
    let event = store::events::get(&pool, id).await?;
    Ok(Json(event))
}

pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateEvent>,
) -> Result<Response, AppError> {
    let new = payload.validate()?;
    let id = store::events::create(&pool, new).await?;
    Ok(response::created("Evento creado", id))
}

pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEvent>,
) -> Result<Response, AppError> {
    let patch = payload.validate()?;
    store::events::update(&pool, id, patch).await?;
    Ok(response::message("Evento actualizado"))
}

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Response, AppError> {
    store::events::delete(&pool, id).await?;
    Ok(response::message("Evento eliminado"))
}
