use crate::riot::client::RiotClient;
use crate::riot::types::{AccountDto, RiotApiResponse};

impl RiotClient {
    /// Get account by Riot ID (game name + tag line).
    /// Uses regional routing (europe).
    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto> {
        tracing::trace!("[RIOT::CLIENT] get_account_by_riot_id {game_name}#{tag_line}");

        let url = format!("{}{}", self.account_base, riot_id_path(game_name, tag_line));

        self.get(url).await
    }
}

fn riot_id_path(game_name: &str, tag_line: &str) -> String {
    format!(
        "/riot/account/v1/accounts/by-riot-id/{}/{}",
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}
