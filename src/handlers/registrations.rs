use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use sqlx::PgPool;

use crate::models::registration::{CreateRegistration, Registration, UpdateRegistration};
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response;

pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Registration>>, AppError> {
    let registrations = store::registrations::list(&pool).await?;
    Ok(Json(registrations))
}

pub async fn get(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Registration>, AppError> {
    let registration = store::registrations::get(&pool, id).await?;
    Ok(Json(registration))
}

pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateRegistration>,
) -> Result<Response, AppError> {
    let new = payload.validate()?;
    let id = store::registrations::create(&pool, new).await?;
    Ok(response::created("Inscripción creada", id))
}

pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRegistration>,
) -> Result<Response, AppError> {
    store::registrations::update(&pool, id, payload).await?;
    Ok(response::message("Inscripción actualizada"))
}

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Response, AppError> {
    store::registrations::delete(&pool, id).await?;
    Ok(response::message("Inscripción eliminada"))
}
