use super::{WikiHintService, USER_AGENT};
use crate::config::AppConfig;
use crate::error::Error;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// PCGamingWiki save-location lookup by Steam app id.
pub struct PcGamingWikiHints {
    client: Client,
    endpoint: String,
}

impl PcGamingWikiHints {
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.wiki_url.trim_end_matches('/').to_string(),
        })
    }
}

impl WikiHintService for PcGamingWikiHints {
    fn fetch_save_hint(&self, app_id: u32) -> Result<Option<String>, Error> {
        let url = format!("{}/{}", self.endpoint, app_id);
        let response = self.client.get(&url).send()?;
        if response.status() != StatusCode::OK {
            debug!("Wiki lookup for {} returned {}", app_id, response.status());
            return Ok(None);
        }
        let body: Value = response.json()?;
        Ok(save_game_field(&body))
    }
}

/// The `save_game` string of a wiki response, if present.
pub fn save_game_field(body: &Value) -> Option<String> {
    body.get("save_game")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
