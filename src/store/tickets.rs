use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::ticket::{NewTicket, Ticket, UpdateTicket};
use crate::utils::error::AppError;
use crate::utils::time;

const NOT_FOUND: &str = "Entrada no encontrada";

pub async fn list(pool: &PgPool) -> Result<Vec<Ticket>, AppError> {
    let tickets = sqlx::query_as::<_, Ticket>("SELECT * FROM entradas")
        .fetch_all(pool)
        .await?;
    Ok(tickets)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Ticket, AppError> {
    sqlx::query_as::<_, Ticket>("SELECT * FROM entradas WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

pub async fn create(pool: &PgPool, new: NewTicket) -> Result<i64, AppError> {
    let now = time::now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO entradas (registration_id, type, price, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $4) RETURNING id",
    )
    .bind(new.registration_id)
    .bind(new.kind)
    .bind(new.price)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(pool: &PgPool, id: i64, patch: UpdateTicket) -> Result<NaiveDateTime, AppError> {
    let current = get(pool, id).await?;
    let updated_at = sqlx::query_scalar::<_, NaiveDateTime>(
        "UPDATE entradas SET registration_id = $1, type = $2, price = $3, updated_at = $4 \
         WHERE id = $5 RETURNING updated_at",
    )
    .bind(patch.registration_id.unwrap_or(current.registration_id))
    .bind(patch.kind.unwrap_or(current.kind))
    .bind(patch.price.unwrap_or(current.price))
    .bind(time::now())
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(updated_at)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM entradas WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(())
}
