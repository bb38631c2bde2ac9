//! Field-level checks shared by the request models.

use thiserror::Error;

/// A rejected field value. The message is safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Reject strings that are empty or whitespace only.
pub fn non_blank(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject empty lists and lists containing blank entries.
pub fn non_empty_list(field: &str, values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject values longer than `max` characters.
pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Minimal address shape check: `local@domain.tld`, no whitespace.
pub fn email_shape(field: &str, value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError(format!("{field} is not a valid email address"));
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_whitespace() {
        let err = non_blank("name", "   ").unwrap_err();
        assert_eq!(err.0, "name cannot be empty");
    }

    #[test]
    fn non_blank_accepts_text() {
        assert!(non_blank("name", "Rex").is_ok());
    }

    #[test]
    fn non_empty_list_rejects_empty_and_blank_entries() {
        assert!(non_empty_list("availableDays", &[]).is_err());
        assert!(non_empty_list("availableDays", &["".to_string()]).is_err());
        assert!(non_empty_list("availableDays", &["monday".to_string()]).is_ok());
    }

    #[test]
    fn max_len_counts_characters() {
        assert!(max_len("zipCode", "12345", 5).is_ok());
        assert!(max_len("zipCode", "123456", 5).is_err());
        assert!(max_len("city", "Zürich", 6).is_ok());
    }

    #[test]
    fn email_shape_checks() {
        assert!(email_shape("email", "info@pawscout.com").is_ok());
        assert!(email_shape("email", "info.pawscout.com").is_err());
        assert!(email_shape("email", "@pawscout.com").is_err());
        assert!(email_shape("email", "info@pawscout").is_err());
        assert!(email_shape("email", "in fo@pawscout.com").is_err());
        assert!(email_shape("email", "a@b@c.com").is_err());
    }
}
