use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::venue::{NewVenue, UpdateVenue, Venue};
use crate::utils::error::AppError;
use crate::utils::time;

const NOT_FOUND: &str = "Lugar no encontrado";

pub async fn list(pool: &PgPool) -> Result<Vec<Venue>, AppError> {
    let venues = sqlx::query_as::<_, Venue>("SELECT * FROM lugares")
        .fetch_all(pool)
        .await?;
    Ok(venues)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Venue, AppError> {
    sqlx::query_as::<_, Venue>("SELECT * FROM lugares WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

pub async fn create(pool: &PgPool, new: NewVenue) -> Result<i64, AppError> {
    let now = time::now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO lugares (name, address, city, country, capacity, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $6) RETURNING id",
    )
    .bind(new.name)
    .bind(new.address)
    .bind(new.city)
    .bind(new.country)
    .bind(new.capacity)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(pool: &PgPool, id: i64, patch: UpdateVenue) -> Result<NaiveDateTime, AppError> {
    let current = get(pool, id).await?;
    let updated_at = sqlx::query_scalar::<_, NaiveDateTime>(
        "UPDATE lugares SET name = $1, address = $2, city = $3, country = $4, capacity = $5, \
         updated_at = $6 WHERE id = $7 RETURNING updated_at",
    )
    .bind(patch.name.unwrap_or(current.name))
    .bind(patch.address.unwrap_or(current.address))
    .bind(patch.city.unwrap_or(current.city))
    .bind(patch.country.unwrap_or(current.country))
    .bind(patch.capacity.unwrap_or(current.capacity))
    .bind(time::now())
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(updated_at)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM lugares WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(())
}
