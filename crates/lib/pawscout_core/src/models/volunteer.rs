//! Volunteer applications.

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Review state of a volunteer application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "volunteer_status", rename_all = "lowercase")]
pub enum VolunteerStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// Persisted volunteer application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub availability: Vec<String>,
    pub available_days: Vec<String>,
    pub areas_of_interest: Vec<String>,
    pub why_volunteer: String,
    pub special_skills: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: VolunteerStatus,
    pub privacy_agreement: bool,
}

/// Submission/replace body.
///
/// `status` is ignored on submission (new applications start `pending`); on
/// replace it is kept unchanged when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerInput {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub availability: Vec<String>,
    pub available_days: Vec<String>,
    pub areas_of_interest: Vec<String>,
    pub why_volunteer: String,
    pub special_skills: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    #[serde(default)]
    pub status: Option<VolunteerStatus>,
    #[serde(default)]
    pub privacy_agreement: bool,
}

impl VolunteerInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let text = [
            ("name", &self.name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("whyVolunteer", &self.why_volunteer),
            ("specialSkills", &self.special_skills),
            ("emergencyContactName", &self.emergency_contact_name),
            ("emergencyContactPhone", &self.emergency_contact_phone),
        ];
        for (field, value) in text {
            validation::non_blank(field, value)?;
        }
        validation::non_empty_list("availability", &self.availability)?;
        validation::non_empty_list("availableDays", &self.available_days)?;
        validation::non_empty_list("areasOfInterest", &self.areas_of_interest)?;
        if !self.privacy_agreement {
            return Err(ValidationError(
                "You must agree to the privacy policy".into(),
            ));
        }
        Ok(())
    }
}

impl Volunteer {
    /// Overwrite this record with `input`. Returns whether anything changed.
    pub fn apply(&mut self, input: VolunteerInput) -> bool {
        let updated = Volunteer {
            id: self.id,
            name: input.name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            availability: input.availability,
            available_days: input.available_days,
            areas_of_interest: input.areas_of_interest,
            why_volunteer: input.why_volunteer,
            special_skills: input.special_skills,
            emergency_contact_name: input.emergency_contact_name,
            emergency_contact_phone: input.emergency_contact_phone,
            status: input.status.unwrap_or(self.status),
            privacy_agreement: input.privacy_agreement,
        };
        if updated == *self {
            return false;
        }
        *self = updated;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Ana",
            "lastName": "Silva",
            "email": "ana@pawscout.com",
            "phone": "555-0100",
            "availability": ["mornings"],
            "availableDays": ["saturday"],
            "areasOfInterest": ["dog walking"],
            "whyVolunteer": "I love animals",
            "specialSkills": "First aid",
            "emergencyContactName": "Rui",
            "emergencyContactPhone": "555-0101",
            "privacyAgreement": true
        })
    }

    fn input() -> VolunteerInput {
        serde_json::from_value(input_json()).unwrap()
    }

    fn record() -> Volunteer {
        let i = input();
        Volunteer {
            id: 1,
            name: i.name,
            last_name: i.last_name,
            email: i.email,
            phone: i.phone,
            availability: i.availability,
            available_days: i.available_days,
            areas_of_interest: i.areas_of_interest,
            why_volunteer: i.why_volunteer,
            special_skills: i.special_skills,
            emergency_contact_name: i.emergency_contact_name,
            emergency_contact_phone: i.emergency_contact_phone,
            status: VolunteerStatus::Pending,
            privacy_agreement: true,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn empty_list_is_rejected() {
        let mut json = input_json();
        json["availableDays"] = serde_json::json!([]);
        let body: VolunteerInput = serde_json::from_value(json).unwrap();
        assert_eq!(body.validate().unwrap_err().0, "availableDays cannot be empty");
    }

    #[test]
    fn privacy_agreement_is_required() {
        let mut json = input_json();
        json.as_object_mut().unwrap().remove("privacyAgreement");
        let body: VolunteerInput = serde_json::from_value(json).unwrap();
        assert_eq!(
            body.validate().unwrap_err().0,
            "You must agree to the privacy policy"
        );
    }

    #[test]
    fn apply_identical_input_reports_no_change() {
        let mut volunteer = record();
        assert!(!volunteer.apply(input()));
    }

    #[test]
    fn apply_keeps_status_when_omitted() {
        let mut volunteer = record();
        volunteer.status = VolunteerStatus::Accepted;
        let mut changed = input();
        changed.phone = "555-0199".into();
        assert!(volunteer.apply(changed));
        assert_eq!(volunteer.phone, "555-0199");
        assert_eq!(volunteer.status, VolunteerStatus::Accepted);
    }

    #[test]
    fn apply_updates_status_when_given() {
        let mut volunteer = record();
        let mut changed = input();
        changed.status = Some(VolunteerStatus::Rejected);
        assert!(volunteer.apply(changed));
        assert_eq!(volunteer.status, VolunteerStatus::Rejected);
    }
}
