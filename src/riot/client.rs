use std::time::Duration;

use serde::de::DeserializeOwned;

use super::types::{RiotApiError, RiotApiResponse};

// Regional routing host for Account-V1.
const ACCOUNT_BASE: &str = "https://europe.api.riotgames.com";
// Platform routing host for Summoner-V4 and League-V4.
const PLATFORM_BASE: &str = "https://euw1.api.riotgames.com";

#[derive(Debug, Clone)]
pub struct RiotClient {
    client: reqwest::Client,
    /// Riot API Key
    key: String,
    pub(crate) account_base: String,
    pub(crate) platform_base: String,
}

impl RiotClient {
    /// Create a new API client using the provided key. Every outbound call is
    /// bounded by `timeout`.
    pub fn new(key: String, timeout: Duration) -> RiotApiResponse<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            key,
            account_base: ACCOUNT_BASE.to_string(),
            platform_base: PLATFORM_BASE.to_string(),
        })
    }

    /// Redirect both routing hosts, e.g. at a mock server in tests.
    pub fn with_base_urls(
        mut self,
        account_base: impl Into<String>,
        platform_base: impl Into<String>,
    ) -> Self {
        self.account_base = account_base.into();
        self.platform_base = platform_base.into();
        self
    }

    /// Shared request logic: authenticates with the `X-Riot-Token` header and
    /// decodes the body on success. Non-success statuses keep the upstream
    /// body for logging.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: String) -> RiotApiResponse<T> {
        let res = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.key)
            .send()
            .await
            .map_err(RiotApiError::Reqwest)?;

        if res.status().is_success() {
            res.json().await.map_err(RiotApiError::Reqwest)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(RiotApiError::Status { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_propagates_reqwest_error() {
        let client = RiotClient::new("TEST_KEY".into(), Duration::from_secs(1)).unwrap();

        // incorrect schema
        let res: RiotApiResponse<()> = client.get("ht!tp://invalid-url".into()).await;

        assert!(matches!(res, Err(RiotApiError::Reqwest(_))));
    }
}
