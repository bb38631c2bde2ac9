//! Contact message queries.

use sqlx::PgPool;

use crate::models::contact::{ContactMessage, ContactMessageInput};

pub async fn create(pool: &PgPool, input: &ContactMessageInput) -> Result<ContactMessage, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        "INSERT INTO contact_messages (name, last_name, email, subject, message) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, name, last_name, email, subject, message, received_at",
    )
    .bind(&input.name)
    .bind(&input.last_name)
    .bind(&input.email)
    .bind(&input.subject)
    .bind(&input.message)
    .fetch_one(pool)
    .await
}
