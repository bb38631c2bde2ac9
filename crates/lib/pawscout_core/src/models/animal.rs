//! Animal listings.

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Persisted animal listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i64,
    pub name: String,
    /// Species, e.g. "dog" or "cat".
    #[serde(rename = "type")]
    pub kind: String,
    pub age: i32,
    pub gender: String,
    pub size: String,
    pub breed: String,
    pub short_description: String,
    pub long_description: String,
    pub good_with_kids: bool,
    pub good_with_dogs: bool,
    pub home_trained: bool,
    pub available_for_adoption: String,
}

/// Create/replace body for an animal listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub age: i32,
    pub gender: String,
    pub size: String,
    pub breed: String,
    pub short_description: String,
    pub long_description: String,
    pub good_with_kids: bool,
    pub good_with_dogs: bool,
    pub home_trained: bool,
    #[serde(default)]
    pub available_for_adoption: String,
}

impl AnimalInput {
    /// Checks performed on create. `availableForAdoption` may be left empty.
    pub fn validate_new(&self) -> Result<(), ValidationError> {
        validation::non_blank("name", &self.name)?;
        validation::non_blank("type", &self.kind)?;
        validation::non_blank("gender", &self.gender)?;
        validation::non_blank("size", &self.size)?;
        validation::non_blank("breed", &self.breed)?;
        validation::non_blank("shortDescription", &self.short_description)?;
        validation::non_blank("longDescription", &self.long_description)?;
        Ok(())
    }

    /// Checks performed on replace; every text field is required.
    pub fn validate_update(&self) -> Result<(), ValidationError> {
        self.validate_new()?;
        validation::non_blank("availableForAdoption", &self.available_for_adoption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> AnimalInput {
        serde_json::from_value(serde_json::json!({
            "name": "Rex",
            "type": "dog",
            "age": 4,
            "gender": "male",
            "size": "large",
            "breed": "Labrador",
            "shortDescription": "Friendly",
            "longDescription": "Loves long walks",
            "goodWithKids": true,
            "goodWithDogs": true,
            "homeTrained": false
        }))
        .unwrap()
    }

    #[test]
    fn type_field_maps_to_kind() {
        assert_eq!(input().kind, "dog");
    }

    #[test]
    fn availability_optional_on_create_only() {
        let animal = input();
        assert!(animal.validate_new().is_ok());
        assert_eq!(
            animal.validate_update().unwrap_err().0,
            "availableForAdoption cannot be empty"
        );
    }

    #[test]
    fn blank_breed_is_rejected() {
        let mut animal = input();
        animal.breed = "".into();
        assert_eq!(animal.validate_new().unwrap_err().0, "breed cannot be empty");
    }
}
