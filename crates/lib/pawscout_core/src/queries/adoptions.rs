//! Adoption application queries.

use sqlx::PgPool;

use crate::models::adoption::{AdoptionApplication, AdoptionInput};

const ADOPTION_COLUMNS: &str = "id, animal_id, applicant_name, applicant_last_name, email, phone, \
     address, city, state, zip_code, reason_for_adoption, experience_with_pets, home_type, \
     who_lives_in_house, agree_to_terms";

pub async fn create(
    pool: &PgPool,
    animal_id: i64,
    input: &AdoptionInput,
) -> Result<AdoptionApplication, sqlx::Error> {
    sqlx::query_as::<_, AdoptionApplication>(&format!(
        "INSERT INTO adoption_applications (animal_id, applicant_name, applicant_last_name, \
         email, phone, address, city, state, zip_code, reason_for_adoption, \
         experience_with_pets, home_type, who_lives_in_house, agree_to_terms) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
         RETURNING {ADOPTION_COLUMNS}"
    ))
    .bind(animal_id)
    .bind(&input.applicant_name)
    .bind(&input.applicant_last_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.address)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.zip_code)
    .bind(&input.reason_for_adoption)
    .bind(&input.experience_with_pets)
    .bind(&input.home_type)
    .bind(&input.who_lives_in_house)
    .bind(input.agree_to_terms)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<AdoptionApplication>, sqlx::Error> {
    sqlx::query_as::<_, AdoptionApplication>(&format!(
        "SELECT {ADOPTION_COLUMNS} FROM adoption_applications WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<AdoptionApplication>, sqlx::Error> {
    sqlx::query_as::<_, AdoptionApplication>(&format!(
        "SELECT {ADOPTION_COLUMNS} FROM adoption_applications ORDER BY id"
    ))
    .fetch_all(pool)
    .await
}
