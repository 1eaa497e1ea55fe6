use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use super::AppState;
use crate::error::LookupError;
use crate::lookup::{self, PlayerSummary};

#[derive(Debug, Deserialize)]
pub struct PlayerParams {
    pub name: Option<String>,
    pub tag: Option<String>,
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerParams>,
) -> Result<Json<PlayerSummary>, LookupError> {
    let name = params.name.unwrap_or_default();
    let tag = params.tag.unwrap_or_default();

    let summary = lookup::resolve(state.riot.as_ref(), &name, &tag).await?;

    Ok(Json(summary))
}

/// Serve the static page. Read per request so edits show up without a
/// restart; a read failure only fails that request.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.config.index_file).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(
                "failed to read {}: {err}",
                state.config.index_file.display()
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
