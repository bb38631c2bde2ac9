//! Administrator request handlers. Mounted behind `require_admin`.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use pawscout_core::models::adoption::AdoptionApplication;
use pawscout_core::models::auth::{User, UserProfile};
use pawscout_core::models::volunteer::Volunteer;
use pawscout_core::queries;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{MessageResponse, RoleChangeResponse};

async fn load_user(state: &AppState, id: i64) -> AppResult<User> {
    queries::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// Reject a promote of an admin, a demote of a non-admin, or a self-demote.
fn check_role_change(actor: &User, target: &User, make_admin: bool) -> AppResult<()> {
    match (make_admin, target.is_admin) {
        (true, true) => Err(AppError::Validation("User is already an admin".into())),
        (false, false) => Err(AppError::Validation("User is not an admin".into())),
        (false, true) if target.id == actor.id => {
            Err(AppError::Validation("Cannot demote yourself".into()))
        }
        _ => Ok(()),
    }
}

fn check_deletion(actor: &User, target: &User) -> AppResult<()> {
    if target.id == actor.id {
        return Err(AppError::Validation("Cannot delete yourself".into()));
    }
    Ok(())
}

/// `GET /admin/users`: every account, without password hashes.
pub async fn list_users_handler(State(state): State<AppState>) -> AppResult<Json<Vec<UserProfile>>> {
    let users = queries::users::list(&state.pool).await?;
    Ok(Json(users.iter().map(UserProfile::from).collect()))
}

/// `PATCH /admin/users/{id}/promote`
pub async fn promote_user_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(admin)): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<RoleChangeResponse>> {
    let user = load_user(&state, id).await?;
    check_role_change(&admin, &user, true)?;
    let user = queries::users::set_admin(&state.pool, id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    info!(user_id = id, by = admin.id, "user promoted to admin");
    Ok(Json(RoleChangeResponse {
        message: format!("User {} promoted to admin successfully", user.email),
        user: UserProfile::from(&user),
    }))
}

/// `PATCH /admin/users/{id}/demote`
pub async fn demote_user_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(admin)): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<RoleChangeResponse>> {
    let user = load_user(&state, id).await?;
    check_role_change(&admin, &user, false)?;
    let user = queries::users::set_admin(&state.pool, id, false)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    info!(user_id = id, by = admin.id, "admin privileges removed");
    Ok(Json(RoleChangeResponse {
        message: format!("Admin privileges removed from {}", user.email),
        user: UserProfile::from(&user),
    }))
}

/// `DELETE /admin/users/{id}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(admin)): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    let user = load_user(&state, id).await?;
    check_deletion(&admin, &user)?;
    if !queries::users::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("User not found".into()));
    }
    info!(user_id = id, by = admin.id, "user deleted");
    Ok(Json(MessageResponse::new(format!(
        "User {} deleted successfully",
        user.email
    ))))
}

/// `GET /admin/adoptions`
pub async fn list_adoptions_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AdoptionApplication>>> {
    Ok(Json(queries::adoptions::list(&state.pool).await?))
}

/// `GET /admin/volunteers`
pub async fn list_volunteers_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Volunteer>>> {
    Ok(Json(queries::volunteers::list(&state.pool).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, is_admin: bool) -> User {
        User {
            id,
            email: format!("user{id}@pawscout.com"),
            name: "Test".into(),
            last_name: "User".into(),
            password_hash: String::new(),
            is_admin,
        }
    }

    fn rejection(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn promote_of_an_admin_is_rejected() {
        let actor = user(1, true);
        assert_eq!(
            rejection(check_role_change(&actor, &user(2, true), true)),
            "User is already an admin"
        );
        assert!(check_role_change(&actor, &user(2, false), true).is_ok());
    }

    #[test]
    fn demote_of_a_member_is_rejected() {
        let actor = user(1, true);
        assert_eq!(
            rejection(check_role_change(&actor, &user(2, false), false)),
            "User is not an admin"
        );
        assert!(check_role_change(&actor, &user(2, true), false).is_ok());
    }

    #[test]
    fn admin_cannot_demote_themselves() {
        let actor = user(1, true);
        assert_eq!(
            rejection(check_role_change(&actor, &actor, false)),
            "Cannot demote yourself"
        );
    }

    #[test]
    fn admin_cannot_delete_themselves() {
        let actor = user(1, true);
        assert_eq!(rejection(check_deletion(&actor, &actor)), "Cannot delete yourself");
        assert!(check_deletion(&actor, &user(2, false)).is_ok());
    }
}
