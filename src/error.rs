use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::riot::RiotApiError;

/// Process-level failures that abort the server.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Riot API client error: {0}")]
    Riot(#[from] RiotApiError),
}

/// Failures of the player lookup pipeline. Display strings are the exact
/// user-visible error messages.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Missing name or tag")]
    MissingRiotId,

    #[error("RIOT_API_KEY not configured")]
    MissingApiKey,

    #[error("Summoner not found")]
    AccountNotFound,

    #[error("Summoner info not found")]
    SummonerNotFound,

    #[error("Ranked info not found")]
    RankedNotFound,

    #[error("Internal server error")]
    Internal(#[source] RiotApiError),
}

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingRiotId => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AccountNotFound | Self::SummonerNotFound | Self::RankedNotFound => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        if let Self::Internal(source) = &self {
            tracing::error!("lookup failed: {source}");
        }

        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_map_to_expected_statuses() {
        assert_eq!(
            LookupError::MissingRiotId.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LookupError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LookupError::AccountNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            LookupError::SummonerNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            LookupError::RankedNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(LookupError::MissingRiotId.to_string(), "Missing name or tag");
        assert_eq!(
            LookupError::MissingApiKey.to_string(),
            "RIOT_API_KEY not configured"
        );
        assert_eq!(LookupError::AccountNotFound.to_string(), "Summoner not found");
        assert_eq!(
            LookupError::SummonerNotFound.to_string(),
            "Summoner info not found"
        );
        assert_eq!(
            LookupError::RankedNotFound.to_string(),
            "Ranked info not found"
        );
    }
}
