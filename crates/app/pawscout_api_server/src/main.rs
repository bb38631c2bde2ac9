//! PawScout API server binary.
//!
//! Loads `.env`, validates auth settings, connects to PostgreSQL, runs
//! migrations and serves the REST API until Ctrl-C.

use clap::Parser;
use pawscout_api::config::{ApiConfig, DEFAULT_BIND_ADDR};
use pawscout_core::auth::AuthConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "info,pawscout_api=debug,pawscout_core=debug";

/// CLI arguments for the API server.
#[derive(Parser)]
#[command(name = "pawscout_api_server", about = "PawScout shelter API server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// HMAC secret used to sign access tokens.
    #[arg(long, env = "AUTH_SECRET_KEY", hide_env_values = true)]
    auth_secret_key: String,

    /// Token signature algorithm (HS256, HS384 or HS512).
    #[arg(long, env = "ALGORITHM")]
    algorithm: String,

    /// Lifetime of tokens issued at login, in minutes.
    #[arg(long, env = "ACCESS_TOKEN_EXPIRE_MINUTES")]
    access_token_expire_minutes: i64,

    /// Cloudinary cloud name.
    #[arg(long, env = "CLOUD_NAME")]
    cloud_name: Option<String>,

    /// Cloudinary API key.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    cloudinary_api_key: Option<String>,

    /// Cloudinary API secret.
    #[arg(long, env = "API_SECRET", hide_env_values = true)]
    cloudinary_api_secret: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();

    // Refuse to start on bad token settings.
    let auth = AuthConfig::new(
        &args.auth_secret_key,
        &args.algorithm,
        args.access_token_expire_minutes,
    )?;
    info!(?auth, "auth configured");

    let cloudinary = ApiConfig::cloudinary_from_parts(
        args.cloud_name,
        args.cloudinary_api_key,
        args.cloudinary_api_secret,
    );
    if cloudinary.is_none() {
        warn!("Cloudinary credentials not set; media routes will answer 503");
    }

    info!(max_connections = args.max_connections, "configuring connection pool");
    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    pawscout_api::migrate(&pool).await?;

    let config = ApiConfig {
        bind_addr: args.bind_addr,
        pg_connection_url: args.database_url,
        auth,
        cloudinary,
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let app = pawscout_api::router(pawscout_api::AppState::new(pool, config));

    info!(addr = %local_addr, "REST API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            info!("shutting down");
        })
        .await?;

    Ok(())
}
