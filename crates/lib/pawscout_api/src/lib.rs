//! # pawscout_api
//!
//! HTTP API library for PawScout.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch, post};
use pawscout_core::auth::{TokenService, UserLookup};
use pawscout_core::media::MediaHost;
use pawscout_core::media::cloudinary::CloudinaryClient;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{admin, adopt, animals, contact, media, settings, subs, users, volunteers};

/// Upper bound on a media request body (all files together).
pub const MAX_MEDIA_BODY_BYTES: usize = 100 * 1024 * 1024;

/// Upper bound on a logo upload body.
pub const MAX_LOGO_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
    /// Access token issuance and verification.
    pub tokens: Arc<TokenService>,
    /// User records as seen by the auth core.
    pub users: Arc<dyn UserLookup<Error = sqlx::Error>>,
    /// Media host, absent when no credentials are configured.
    pub media: Option<Arc<dyn MediaHost>>,
}

impl AppState {
    /// Build state backed by `pool`, with a Cloudinary client if configured.
    pub fn new(pool: PgPool, config: ApiConfig) -> Self {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let media = config
            .cloudinary
            .clone()
            .map(|c| Arc::new(CloudinaryClient::new(c)) as Arc<dyn MediaHost>);
        Self {
            users: Arc::new(pool.clone()),
            pool,
            config,
            tokens,
            media,
        }
    }
}

/// Run embedded database migrations.
///
/// Delegates to `pawscout_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    pawscout_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public paths. Admin-only methods on these paths use the `AdminUser`
    // extractor.
    let public = Router::new()
        .route("/users/register", post(users::register_handler))
        .route("/users/login", post(users::login_handler))
        .route("/users/{id}", get(users::get_user_handler))
        .route(
            "/animals",
            get(animals::list_animals_handler).post(animals::create_animal_handler),
        )
        .route(
            "/animals/{id}",
            get(animals::get_animal_handler)
                .put(animals::update_animal_handler)
                .delete(animals::delete_animal_handler),
        )
        .route(
            "/adopt/{id}",
            post(adopt::submit_application_handler).get(adopt::get_application_handler),
        )
        .route(
            "/volunteers",
            get(volunteers::list_volunteers_handler).post(volunteers::submit_volunteer_handler),
        )
        .route(
            "/volunteers/{id}",
            get(volunteers::get_volunteer_handler).put(volunteers::update_volunteer_handler),
        )
        .route("/contact", post(contact::contact_handler))
        .route(
            "/subs",
            get(subs::list_subscriptions_handler).post(subs::subscribe_handler),
        )
        .route(
            "/settings",
            get(settings::get_settings_handler).put(settings::update_settings_handler),
        )
        .route(
            "/settings/logo",
            post(settings::upload_logo_handler).layer(DefaultBodyLimit::max(MAX_LOGO_BODY_BYTES)),
        );

    // Any authenticated user
    let authenticated = Router::new()
        .route("/users/me", get(users::me_handler))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_user,
        ));

    // Administrators only
    let admin = Router::new()
        .route("/admin/users", get(admin::list_users_handler))
        .route("/admin/users/{id}", delete(admin::delete_user_handler))
        .route("/admin/users/{id}/promote", patch(admin::promote_user_handler))
        .route("/admin/users/{id}/demote", patch(admin::demote_user_handler))
        .route("/admin/adoptions", get(admin::list_adoptions_handler))
        .route("/admin/volunteers", get(admin::list_volunteers_handler))
        .route("/media/upload", post(media::upload_handler))
        .route("/media/upload-multiple", post(media::upload_multiple_handler))
        .route("/media/delete", delete(media::delete_handler))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ))
        .layer(DefaultBodyLimit::max(MAX_MEDIA_BODY_BYTES));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
