//! Role gate applied after identity resolution.

use super::AuthError;
use crate::models::auth::User;

/// Pass the user through if they are an administrator.
pub fn require_admin(user: User) -> Result<User, AuthError> {
    if user.is_admin {
        Ok(user)
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::identity::tests::user;

    #[test]
    fn admin_passes_unchanged() {
        let admin = user(1, "boss@pawscout.com", true);
        assert_eq!(require_admin(admin.clone()).unwrap(), admin);
    }

    #[test]
    fn member_is_forbidden() {
        let member = user(2, "member@pawscout.com", false);
        assert!(matches!(require_admin(member), Err(AuthError::Forbidden)));
    }
}
