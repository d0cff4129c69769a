use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response;

pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Category>>, AppError> {
    let categories = store::categories::list(&pool).await?;
    Ok(Json(categories))
}

pub async fn get(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    let category = store::categories::get(&pool, id).await?;
    Ok(Json(category))
}

pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateCategory>,
) -> Result<Response, AppError> {
    let new = payload.validate()?;
    let id = store::categories::create(&pool, new).await?;
    Ok(response::created("Categoría creada", id))
}

pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategory>,
) -> Result<Response, AppError> {
    store::categories::update(&pool, id, payload).await?;
    Ok(response::message("Categoría actualizada"))
}

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Response, AppError> {
    store::categories::delete(&pool, id).await?;
    Ok(response::message("Categoría eliminada"))
}
