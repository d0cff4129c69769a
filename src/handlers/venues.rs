use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue};
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response;

pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Venue>>, AppError> {
    let venues = store::venues::list(&pool).await?;
    Ok(Json(venues))
}

pub async fn get(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Json<Venue>, AppError> {
    let venue = store::venues::get(&pool, id).await?;
    Ok(Json(venue))
}

pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateVenue>,
) -> Result<Response, AppError> {
    let new = payload.validate()?;
    let id = store::venues::create(&pool, new).await?;
    Ok(response::created("Lugar creado", id))
}

pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVenue>,
) -> Result<Response, AppError> {
    let updated_at = store::venues::update(&pool, id, payload).await?;
    Ok(response::updated("Lugar actualizado", updated_at))
}

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Response, AppError> {
    store::venues::delete(&pool, id).await?;
    Ok(response::message("Lugar eliminado"))
}
