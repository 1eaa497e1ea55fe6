//! Inbound HTTP surface: router, shared state and the listener loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::riot::RiotClient;

pub mod cors;
pub mod handlers;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no `RIOT_API_KEY` is configured; lookups then answer a
    /// per-request configuration error.
    pub riot: Option<RiotClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let riot = match &config.riot_api_key {
            Some(key) => Some(RiotClient::new(key.clone(), config.request_timeout)?),
            None => {
                warn!("RIOT_API_KEY not set, player lookups will fail");
                None
            }
        };

        Ok(Self { config, riot })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .route("/api/player", get(handlers::get_player))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(cors::apply))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<(), AppError> {
    let port = config.port;
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("🛰️ Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
