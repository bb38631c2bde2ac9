//! User account queries.

use sqlx::PgPool;

use crate::models::auth::User;

const USER_COLUMNS: &str = "id, email, name, last_name, password_hash, is_admin";

/// Fetch a user by ID.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch a user by email.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

/// Create a new user, returning the stored row.
///
/// The account is an administrator exactly when the table was empty. The
/// table lock serializes concurrent registrations so only one of them can
/// observe it empty.
pub async fn create(
    pool: &PgPool,
    email: &str,
    name: &str,
    last_name: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;
    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (email, name, last_name, password_hash, is_admin) \
         SELECT $1, $2, $3, $4, NOT EXISTS (SELECT 1 FROM users) RETURNING {USER_COLUMNS}"
    ))
    .bind(email)
    .bind(name)
    .bind(last_name)
    .bind(password_hash)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(user)
}

/// List all users, oldest first.
pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Set the admin flag, returning the updated row if the user exists.
pub async fn set_admin(pool: &PgPool, id: i64, is_admin: bool) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "UPDATE users SET is_admin = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(is_admin)
    .fetch_optional(pool)
    .await
}

/// Delete a user. Returns whether a row was removed.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
