use crate::riot::client::RiotClient;
use crate::riot::types::{LeagueEntryDto, RiotApiResponse};

impl RiotClient {
    /// Get league entries (ranked info) for a summoner id.
    /// Uses platform routing (euw1).
    pub async fn get_league_entries_by_summoner(
        &self,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!("[RIOT::CLIENT] get_league_entries_by_summoner {summoner_id}");

        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_base, summoner_id
        );

        self.get(url).await
    }
}
