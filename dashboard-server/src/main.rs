//! Engine Maintenance Dashboard Server
//!
//! Serves the maintenance dashboard as a JSON API: current-reading
//! assessment plus chart data over the historical engine log.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  MAINTENANCE DASHBOARD                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌──────────────────────┐ │
//! │  │  API      │  │  Assessment  │  │  Chart data          │ │
//! │  │  (Axum)   │  │  predictor + │  │  trends, scatter,    │ │
//! │  │           │  │  safety      │  │  distribution        │ │
//! │  └─────┬─────┘  └──────┬───────┘  └──────────┬───────────┘ │
//! │        └───────────────┼─────────────────────┘              │
//! │                        ▼                                    │
//! │          ┌──────────────────────────────┐                   │
//! │          │ Telemetry log + model (RO)   │                   │
//! │          └──────────────────────────────┘                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod extract;
mod models;
mod handlers;


use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maintenance_core::logic::alert::AlertPolicy;
use maintenance_core::logic::telemetry;
use maintenance_core::{load_predictor, Dashboard};

pub use error::{AppError, AppResult, StartupError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "maintenance_dashboard=debug,maintenance_core=info,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("{} v{} starting...", maintenance_core::constants::APP_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Telemetry: {}", config.telemetry_path.display());
    tracing::info!("Model: {}", config.model_path.display());

    let dashboard = load_dashboard(&config).context("Startup failed")?;

    let state = AppState {
        dashboard: Arc::new(dashboard),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Load the telemetry log and model; either missing is fatal
fn load_dashboard(config: &config::Config) -> Result<Dashboard, StartupError> {
    let log = telemetry::load_csv(&config.telemetry_path)?;
    let predictor = load_predictor(&config.model_path, config.model_sha256.as_deref())?;

    Ok(Dashboard::new(log, predictor).with_alert_policy(AlertPolicy::new(config.alert_hours)))
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/controls", get(handlers::controls::get))
        .route("/api/v1/assessments", post(handlers::assessments::create))
        .route("/api/v1/log", get(handlers::telemetry::preview))

        // Charts
        .route("/api/v1/trends/parameter", get(handlers::trends::parameter))
        .route("/api/v1/trends/moving-average", get(handlers::trends::moving_average))
        .route("/api/v1/trends/load-oil-pressure", get(handlers::trends::load_oil_pressure))
        .route("/api/v1/safety/distribution", get(handlers::safety::distribution))

        // Model
        .route("/api/v1/model", get(handlers::model::status));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
