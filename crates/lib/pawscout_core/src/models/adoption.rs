//! Adoption applications.

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Persisted adoption application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionApplication {
    pub id: i64,
    pub animal_id: i64,
    pub applicant_name: String,
    pub applicant_last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub reason_for_adoption: String,
    pub experience_with_pets: String,
    pub home_type: String,
    pub who_lives_in_house: String,
    pub agree_to_terms: bool,
}

/// Submission body. The target animal comes from the request path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionInput {
    pub applicant_name: String,
    pub applicant_last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub reason_for_adoption: String,
    pub experience_with_pets: String,
    pub home_type: String,
    pub who_lives_in_house: String,
    pub agree_to_terms: bool,
}

impl AdoptionInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("applicantName", &self.applicant_name),
            ("applicantLastName", &self.applicant_last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("reasonForAdoption", &self.reason_for_adoption),
            ("experienceWithPets", &self.experience_with_pets),
            ("homeType", &self.home_type),
            ("whoLivesInHouse", &self.who_lives_in_house),
        ];
        for (field, value) in fields {
            validation::non_blank(field, value)?;
        }
        if !self.agree_to_terms {
            return Err(ValidationError(
                "You must agree to the adoption terms".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> serde_json::Value {
        serde_json::json!({
            "animalId": 99,
            "applicantName": "Ana",
            "applicantLastName": "Silva",
            "email": "ana@pawscout.com",
            "phone": "555-0100",
            "address": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zipCode": "62701",
            "reasonForAdoption": "Company",
            "experienceWithPets": "Two dogs",
            "homeType": "house",
            "whoLivesInHouse": "Two adults",
            "agreeToTerms": true
        })
    }

    #[test]
    fn body_animal_id_is_ignored() {
        let body: AdoptionInput = serde_json::from_value(input()).unwrap();
        assert!(body.validate().is_ok());
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut json = input();
        json["agreeToTerms"] = serde_json::json!(false);
        let body: AdoptionInput = serde_json::from_value(json).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn blank_city_is_rejected() {
        let mut json = input();
        json["city"] = serde_json::json!("  ");
        let body: AdoptionInput = serde_json::from_value(json).unwrap();
        assert_eq!(body.validate().unwrap_err().0, "city cannot be empty");
    }
}
