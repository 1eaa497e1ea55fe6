use crate::riot::client::RiotClient;
use crate::riot::types::{RiotApiResponse, SummonerDto};

impl RiotClient {
    /// Get summoner by PUUID.
    /// Uses platform routing (euw1).
    pub async fn get_summoner_by_puuid(&self, puuid: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[RIOT::CLIENT] get_summoner_by_puuid {puuid}");

        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_base, puuid
        );

        self.get(url).await
    }
}
