use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::user::{NewUser, UpdateUser, User};
use crate::utils::error::AppError;
use crate::utils::{password, time};

const NOT_FOUND: &str = "Usuario no encontrado";

pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM usuarios")
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

pub async fn create(pool: &PgPool, new: NewUser) -> Result<i64, AppError> {
    let hash = password::hash_password(&new.password)?;
    let now = time::now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO usuarios (name, email, password, address, role, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $6) RETURNING id",
    )
    .bind(new.name)
    .bind(new.email)
    .bind(hash)
    .bind(new.address)
    .bind(new.role)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update(pool: &PgPool, id: i64, patch: UpdateUser) -> Result<NaiveDateTime, AppError> {
    let current = get(pool, id).await?;
    // A new password is re-hashed; otherwise the stored hash is kept.
    let password = match patch.password {
        Some(plain) => password::hash_password(&plain)?,
        None => current.password,
    };
    let updated_at = sqlx::query_scalar::<_, NaiveDateTime>(
        "UPDATE usuarios SET name = $1, email = $2, password = $3, address = $4, role = $5, \
         updated_at = $6 WHERE id = $7 RETURNING updated_at",
    )
    .bind(patch.name.unwrap_or(current.name))
    .bind(patch.email.unwrap_or(current.email))
    .bind(password)
    .bind(patch.address.unwrap_or(current.address))
    .bind(patch.role.unwrap_or(current.role))
    .bind(time::now())
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(updated_at)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(())
}
