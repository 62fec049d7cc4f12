use std::path::Path;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

pub mod payloads;
pub mod routes;
pub mod state;

use crate::config::ServerConfig;
use crate::db::Store;
use crate::error::PartyResult;
pub use state::AppState;

/// Builds the API router. When `static_dir` exists it is served for every
/// path the API does not claim.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route(
            "/api/families",
            get(routes::list_families).post(routes::create_family),
        )
        .route(
            "/api/families/:family_id",
            put(routes::update_family).delete(routes::delete_family),
        )
        .route(
            "/api/families/:family_id/members",
            post(routes::add_member),
        )
        .route(
            "/api/families/:family_id/members/:member_id",
            put(routes::update_member).delete(routes::remove_member),
        )
        .route("/api/food", get(routes::list_food).post(routes::add_food))
        .route("/api/food/:id", delete(routes::remove_food))
        .route("/api/config", get(routes::party_config))
        .route("/api/summary", get(routes::party_summary))
        .with_state(state);

    let app = match static_dir {
        Some(dir) if dir.is_dir() => {
            info!(dir = %dir.display(), "serving static files");
            api.fallback_service(ServeDir::new(dir))
        }
        Some(dir) => {
            warn!(dir = %dir.display(), "static directory not found, serving API only");
            api
        }
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: ServerConfig) -> PartyResult<()> {
    info!("Initializing state...");
    let store = Store::open(&config.data_dir)?;
    let party = config.party_details()?;
    let state = AppState::new(store, party, config.storage_timeout);

    info!("Starting server...");
    let app = build_router(state, Some(&config.static_dir));

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Party planner running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}
