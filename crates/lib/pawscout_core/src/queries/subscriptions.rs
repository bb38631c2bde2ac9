//! Newsletter subscription queries.

use sqlx::PgPool;

use crate::models::subscription::Subscription;

pub async fn create(pool: &PgPool, email: &str) -> Result<Subscription, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "INSERT INTO subscriptions (email) VALUES ($1) RETURNING id, email",
    )
    .bind(email)
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>("SELECT id, email FROM subscriptions ORDER BY id")
        .fetch_all(pool)
        .await
}
