use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Riot API credential forwarded on every upstream call. Absent keys are
    /// reported per request rather than failing startup.
    pub riot_api_key: Option<String>,
    pub port: u16,
    /// Static page served on `/` and `/index.html`.
    pub index_file: PathBuf,
    /// Timeout applied to each outbound Riot API call.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        const DEFAULT_PORT: u16 = 3000;
        const DEFAULT_INDEX_FILE: &str = "static/index.html";
        const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

        let riot_api_key = env::var("RIOT_API_KEY").ok().filter(|k| !k.is_empty());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let index_file = env::var("INDEX_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_INDEX_FILE));

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            riot_api_key,
            port,
            index_file,
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }
}
