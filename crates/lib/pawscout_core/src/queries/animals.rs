//! Animal listing queries.

use sqlx::PgPool;

use crate::models::animal::{Animal, AnimalInput};

const ANIMAL_COLUMNS: &str = "id, name, kind, age, gender, size, breed, short_description, \
     long_description, good_with_kids, good_with_dogs, home_trained, available_for_adoption";

pub async fn list(pool: &PgPool) -> Result<Vec<Animal>, sqlx::Error> {
    sqlx::query_as::<_, Animal>(&format!("SELECT {ANIMAL_COLUMNS} FROM animals ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Animal>, sqlx::Error> {
    sqlx::query_as::<_, Animal>(&format!("SELECT {ANIMAL_COLUMNS} FROM animals WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM animals WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn create(pool: &PgPool, input: &AnimalInput) -> Result<Animal, sqlx::Error> {
    sqlx::query_as::<_, Animal>(&format!(
        "INSERT INTO animals (name, kind, age, gender, size, breed, short_description, \
         long_description, good_with_kids, good_with_dogs, home_trained, available_for_adoption) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING {ANIMAL_COLUMNS}"
    ))
    .bind(&input.name)
    .bind(&input.kind)
    .bind(input.age)
    .bind(&input.gender)
    .bind(&input.size)
    .bind(&input.breed)
    .bind(&input.short_description)
    .bind(&input.long_description)
    .bind(input.good_with_kids)
    .bind(input.good_with_dogs)
    .bind(input.home_trained)
    .bind(&input.available_for_adoption)
    .fetch_one(pool)
    .await
}

/// Replace every field of an animal. Returns `None` if it does not exist.
pub async fn update(pool: &PgPool, id: i64, input: &AnimalInput) -> Result<Option<Animal>, sqlx::Error> {
    sqlx::query_as::<_, Animal>(&format!(
        "UPDATE animals SET name = $2, kind = $3, age = $4, gender = $5, size = $6, breed = $7, \
         short_description = $8, long_description = $9, good_with_kids = $10, \
         good_with_dogs = $11, home_trained = $12, available_for_adoption = $13 \
         WHERE id = $1 RETURNING {ANIMAL_COLUMNS}"
    ))
    .bind(id)
    .bind(&input.name)
    .bind(&input.kind)
    .bind(input.age)
    .bind(&input.gender)
    .bind(&input.size)
    .bind(&input.breed)
    .bind(&input.short_description)
    .bind(&input.long_description)
    .bind(input.good_with_kids)
    .bind(input.good_with_dogs)
    .bind(input.home_trained)
    .bind(&input.available_for_adoption)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM animals WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
