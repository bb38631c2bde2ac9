//! Volunteer application queries.

use sqlx::PgPool;

use crate::models::volunteer::{Volunteer, VolunteerInput, VolunteerStatus};

const VOLUNTEER_COLUMNS: &str = "id, name, last_name, email, phone, availability, available_days, \
     areas_of_interest, why_volunteer, special_skills, emergency_contact_name, \
     emergency_contact_phone, status, privacy_agreement";

pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM volunteers WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn phone_exists(pool: &PgPool, phone: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM volunteers WHERE phone = $1)")
        .bind(phone)
        .fetch_one(pool)
        .await
}

/// Store a new application with status `pending`.
pub async fn create(pool: &PgPool, input: &VolunteerInput) -> Result<Volunteer, sqlx::Error> {
    sqlx::query_as::<_, Volunteer>(&format!(
        "INSERT INTO volunteers (name, last_name, email, phone, availability, available_days, \
         areas_of_interest, why_volunteer, special_skills, emergency_contact_name, \
         emergency_contact_phone, status, privacy_agreement) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
         RETURNING {VOLUNTEER_COLUMNS}"
    ))
    .bind(&input.name)
    .bind(&input.last_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.availability)
    .bind(&input.available_days)
    .bind(&input.areas_of_interest)
    .bind(&input.why_volunteer)
    .bind(&input.special_skills)
    .bind(&input.emergency_contact_name)
    .bind(&input.emergency_contact_phone)
    .bind(VolunteerStatus::Pending)
    .bind(input.privacy_agreement)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Volunteer>, sqlx::Error> {
    sqlx::query_as::<_, Volunteer>(&format!(
        "SELECT {VOLUNTEER_COLUMNS} FROM volunteers WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Volunteer>, sqlx::Error> {
    sqlx::query_as::<_, Volunteer>(&format!("SELECT {VOLUNTEER_COLUMNS} FROM volunteers ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Persist every field of `volunteer`.
pub async fn update(pool: &PgPool, volunteer: &Volunteer) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE volunteers SET name = $2, last_name = $3, email = $4, phone = $5, \
         availability = $6, available_days = $7, areas_of_interest = $8, why_volunteer = $9, \
         special_skills = $10, emergency_contact_name = $11, emergency_contact_phone = $12, \
         status = $13, privacy_agreement = $14 WHERE id = $1",
    )
    .bind(volunteer.id)
    .bind(&volunteer.name)
    .bind(&volunteer.last_name)
    .bind(&volunteer.email)
    .bind(&volunteer.phone)
    .bind(&volunteer.availability)
    .bind(&volunteer.available_days)
    .bind(&volunteer.areas_of_interest)
    .bind(&volunteer.why_volunteer)
    .bind(&volunteer.special_skills)
    .bind(&volunteer.emergency_contact_name)
    .bind(&volunteer.emergency_contact_phone)
    .bind(volunteer.status)
    .bind(volunteer.privacy_agreement)
    .execute(pool)
    .await?;
    Ok(())
}
