//! Three-stage lookup pipeline: Riot ID → account → summoner → ranked entries.
//!
//! Every stage depends on the previous one's output, so the calls run strictly
//! in sequence and the first failure short-circuits the rest.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::riot::{LeagueEntryDto, RiotApiError, RiotClient};

/// Normalized ranked summary returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub tag: String,
    pub tier: String,
    pub rank: String,
    pub lp: u16,
    pub wins: u16,
    pub losses: u16,
}

impl PlayerSummary {
    fn from_entry(name: String, tag: String, entry: LeagueEntryDto) -> Self {
        Self {
            name,
            tag,
            tier: entry.tier,
            rank: entry.rank,
            lp: entry.league_points,
            wins: entry.wins,
            losses: entry.losses,
        }
    }

    fn unranked(name: String, tag: String) -> Self {
        Self {
            name,
            tag,
            tier: "UNRANKED".to_string(),
            rank: String::new(),
            lp: 0,
            wins: 0,
            losses: 0,
        }
    }
}

/// Resolve a Riot ID to its solo queue ranked summary.
///
/// `riot` is `None` when no API credential is configured; the pipeline reports
/// that per request instead of refusing to start.
pub async fn resolve(
    riot: Option<&RiotClient>,
    name: &str,
    tag: &str,
) -> Result<PlayerSummary, LookupError> {
    if name.is_empty() || tag.is_empty() {
        return Err(LookupError::MissingRiotId);
    }

    let riot = riot.ok_or(LookupError::MissingApiKey)?;

    let account = riot
        .get_account_by_riot_id(name, tag)
        .await
        .map_err(|err| stage_error(err, LookupError::AccountNotFound))?;
    debug!(puuid = %account.puuid, "account resolved");

    let summoner = riot
        .get_summoner_by_puuid(&account.puuid)
        .await
        .map_err(|err| stage_error(err, LookupError::SummonerNotFound))?;
    debug!(summoner_id = %summoner.id, "summoner resolved");

    let entries = riot
        .get_league_entries_by_summoner(&summoner.id)
        .await
        .map_err(|err| stage_error(err, LookupError::RankedNotFound))?;

    let summary = match entries.into_iter().find(|e| e.is_ranked_solo_duo()) {
        Some(entry) => PlayerSummary::from_entry(name.to_string(), tag.to_string(), entry),
        None => PlayerSummary::unranked(name.to_string(), tag.to_string()),
    };

    Ok(summary)
}

/// Map one stage's upstream rejection to its generic not-found error. The
/// upstream body stays in the logs and never reaches the caller.
fn stage_error(err: RiotApiError, not_found: LookupError) -> LookupError {
    match err {
        RiotApiError::Status { status, body } => {
            warn!(%status, %body, "upstream call rejected");
            not_found
        }
        other => LookupError::Internal(other),
    }
}
