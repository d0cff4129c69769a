use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use sqlx::PgPool;

use crate::models::ticket::{CreateTicket, Ticket, UpdateTicket};
use crate::store;
use crate::utils::error::AppError;
use crate::utils::response;

pub async fn list(State(pool): State<PgPool>) -> Result<Json<Vec<Ticket>>, AppError> {
    let tickets = store::tickets::list(&pool).await?;
    Ok(Json(tickets))
}

pub async fn get(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Json<Ticket>, AppError> {
    let ticket = store::tickets::get(&pool, id).await?;
    Ok(Json(ticket))
}

pub async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateTicket>,
) -> Result<Response, AppError> {
    let new = payload.validate()?;
    let id = store::tickets::create(&pool, new).await?;
    Ok(response::created("Entrada creada", id))
}

pub async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTicket>,
) -> Result<Response, AppError> {
    store::tickets::update(&pool, id, payload).await?;
    Ok(response::message("Entrada actualizada"))
}

pub async fn delete(State(pool): State<PgPool>, Path(id): Path<i64>) -> Result<Response, AppError> {
    store::tickets::delete(&pool, id).await?;
    Ok(response::message("Entrada eliminada"))
}
