use std::{path::Path, sync::Arc};

use axum::{Router, extract::FromRef, response::Redirect, routing::{delete, get, post}};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{
    api::{activities::{list_activities, remove_participant, signup_for_activity}, health::health_check},
    error::ApiError,
    services::activity_store::ActivityStore,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ApiError::StartupError(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => 8080,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ActivityStore>,
}

impl FromRef<AppState> for Arc<ActivityStore> {
    fn from_ref(state: &AppState) -> Arc<ActivityStore> {
        state.store.clone()
    }
}

pub fn create_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/health", get(health_check))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route("/activities/{activity_name}/participants", delete(remove_participant))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}

pub async fn create_server(config: ServerConfig, store: Arc<ActivityStore>) -> Result<(), ApiError> {
    let state = AppState { store };

    let app = create_app(state, &config.static_dir);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ApiError::StartupError(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::StartupError(format!("Server error: {}", e)))
}
