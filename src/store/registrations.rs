use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::registration::{NewRegistration, Registration, UpdateRegistration};
use crate::utils::error::AppError;
use crate::utils::time;

const NOT_FOUND: &str = "Inscripción no encontrada";

pub async fn list(pool: &PgPool) -> Result<Vec<Registration>, AppError> {
    let registrations = sqlx::query_as::<_, Registration>("SELECT * FROM inscripciones")
        .fetch_all(pool)
        .await?;
    Ok(registrations)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Registration, AppError> {
    sqlx::query_as::<_, Registration>("SELECT * FROM inscripciones WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

pub async fn create(pool: &PgPool, new: NewRegistration) -> Result<i64, AppError> {
    let now = time::now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO inscripciones (event_id, assistant_id, status, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $4) RETURNING id",
    )
    .bind(new.event_id)
    .bind(new.assistant_id)
    .bind(new.status)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    patch: UpdateRegistration,
) -> Result<NaiveDateTime, AppError> {
    let current = get(pool, id).await?;
    let updated_at = sqlx::query_scalar::<_, NaiveDateTime>(
        "UPDATE inscripciones SET event_id = $1, assistant_id = $2, status = $3, updated_at = $4 \
         WHERE id = $5 RETURNING updated_at",
    )
    .bind(patch.event_id.unwrap_or(current.event_id))
    .bind(patch.assistant_id.unwrap_or(current.assistant_id))
    .bind(patch.status.unwrap_or(current.status))
    .bind(time::now())
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(updated_at)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM inscripciones WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(())
}
