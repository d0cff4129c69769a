use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::category::{Category, NewCategory, UpdateCategory};
use crate::utils::error::AppError;
use crate::utils::time;

const NOT_FOUND: &str = "Categoría no encontrada";

pub async fn list(pool: &PgPool) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categorias")
        .fetch_all(pool)
        .await?;
    Ok(categories)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Category, AppError> {
    sqlx::query_as::<_, Category>("SELECT * FROM categorias WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

pub async fn create(pool: &PgPool, new: NewCategory) -> Result<i64, AppError> {
    let now = time::now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO categorias (name, description, created_at, updated_at) \
         VALUES ($1, $2, $3, $3) RETURNING id",
    )
    .bind(new.name)
    .bind(new.description)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    patch: UpdateCategory,
) -> Result<NaiveDateTime, AppError> {
    let current = get(pool, id).await?;
    let updated_at = sqlx::query_scalar::<_, NaiveDateTime>(
        "UPDATE categorias SET name = $1, description = $2, updated_at = $3 \
         WHERE id = $4 RETURNING updated_at",
    )
    .bind(patch.name.unwrap_or(current.name))
    .bind(patch.description.unwrap_or(current.description))
    .bind(time::now())
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(updated_at)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM categorias WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(())
}
