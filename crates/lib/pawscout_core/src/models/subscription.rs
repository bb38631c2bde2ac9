//! Newsletter subscriptions.

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Maximum stored email length.
const MAX_EMAIL_LEN: usize = 100;

/// Persisted subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Subscription {
    pub id: i64,
    pub email: String,
}

/// Subscribe body.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionInput {
    pub email: String,
}

impl SubscriptionInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError("Email cannot be empty".into()));
        }
        validation::max_len("email", &self.email, MAX_EMAIL_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_overlong() {
        let blank = SubscriptionInput { email: " ".into() };
        assert_eq!(blank.validate().unwrap_err().0, "Email cannot be empty");

        let long = SubscriptionInput {
            email: format!("{}@pawscout.com", "a".repeat(100)),
        };
        assert!(long.validate().is_err());

        let ok = SubscriptionInput {
            email: "fan@pawscout.com".into(),
        };
        assert!(ok.validate().is_ok());
    }
}
