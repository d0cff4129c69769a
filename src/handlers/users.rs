use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response;

pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<User>>, AppError> {
    let users = store::users::list(&pool).await?;
    Ok(Json(users))
}

pub async fn get(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Json<User>, AppError> {
    let user = store::users::get(&pool, id).await?;
    Ok(Json(user))
}

pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateUser>,
) -> Result<Response, AppError> {
    let new = payload.validate()?;
    let id = store::users::create(&pool, new).await?;
    Ok(response::created("Usuario creado", id))
}

pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> Result<Response, AppError> {
    let updated_at = store::users::update(&pool, id, payload).await?;
    Ok(response::updated("Usuario actualizado", updated_at))
}

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Response, AppError> {
    store::users::delete(&pool, id).await?;
    Ok(response::message("Usuario eliminado"))
}
