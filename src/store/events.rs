use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::event::{Event, EventPatch, NewEvent};
use crate::utils::error::AppError;
use crate::utils::time;

const NOT_FOUND: &str = "Evento no encontrado";

pub async fn list(pool: &PgPool) -> Result<Vec<Event>, AppError> {
    let events = sqlx::query_as::<_, Event>("SELECT * FROM eventos")
        .fetch_all(pool)
        .await?;
    Ok(events)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Event, AppError> {
    sqlx::query_as::<_, Event>("SELECT * FROM eventos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

pub async fn create(pool: &PgPool, new: NewEvent) -> Result<i64, AppError> {
    let now = time::now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO eventos (organizer_id, title, description, start_time, end_time, place_id, \
         category_id, status, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) RETURNING id",
    )
    .bind(new.organizer_id)
    .bind(new.title)
    .bind(new.description)
    .bind(new.start_time)
    .bind(new.end_time)
    .bind(new.place_id)
    .bind(new.category_id)
    .bind(new.status)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(pool: &PgPool, id: i64, patch: EventPatch) -> Result<NaiveDateTime, AppError> {
    let current = get(pool, id).await?;
    let updated_at = sqlx::query_scalar::<_, NaiveDateTime>(
        "UPDATE eventos SET organizer_id = $1, title = $2, description = $3, start_time = $4, \
         end_time = $5, place_id = $6, category_id = $7, status = $8, updated_at = $9 \
         WHERE id = $10 RETURNING updated_at",
    )
    .bind(patch.organizer_id.unwrap_or(current.organizer_id))
    .bind(patch.title.unwrap_or(current.title))
    .bind(patch.description.unwrap_or(current.description))
    .bind(patch.start_time.unwrap_or(current.start_time))
    .bind(patch.end_time.unwrap_or(current.end_time))
    .bind(patch.place_id.unwrap_or(current.place_id))
    .bind(patch.category_id.unwrap_or(current.category_id))
    .bind(patch.status.unwrap_or(current.status))
    .bind(time::now())
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(updated_at)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM eventos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(())
}
