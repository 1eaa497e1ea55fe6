use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {status}")]
    Status {
        status: StatusCode,
        /// Upstream error body, kept for diagnostics only and never surfaced
        /// to callers.
        body: String,
    },
}

/// A call to the Riot API can either succeed with the decoded body or fail
/// with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;

/// Representation of the Account-V1 response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

/// Representation of the Summoner-V4 response. Only the encrypted summoner id
/// is needed to chain into League-V4; other fields are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct SummonerDto {
    pub id: String,
}

/// Representation of one League-V4 ranked entry.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    /// Division within the tier. Apex tiers carry no division, so the field
    /// may be absent upstream.
    #[serde(default)]
    pub rank: String,
    pub league_points: u16,
    pub wins: u16,
    pub losses: u16,
}

impl LeagueEntryDto {
    pub fn is_ranked_solo_duo(&self) -> bool {
        self.queue_type.eq("RANKED_SOLO_5x5")
    }
}
