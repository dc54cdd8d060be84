use super::{CatalogEntry, CatalogService, USER_AGENT};
use crate::config::AppConfig;
use crate::error::Error;
use crate::identity::fallback_name;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT_LANGUAGE;
use serde_json::Value;
use tracing::debug;

/// Steam storefront `appdetails` lookup.
pub struct SteamStoreCatalog {
    client: Client,
    endpoint: String,
}

impl SteamStoreCatalog {
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.catalog_url.clone(),
        })
    }
}

impl CatalogService for SteamStoreCatalog {
    fn fetch_identity(&self, app_id: u32) -> Result<Option<CatalogEntry>, Error> {
        debug!("Querying store catalog for {}", app_id);
        let body: Value = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("appids", app_id.to_string()),
                ("cc", "us".to_string()),
                ("l", "english".to_string()),
            ])
            .header(ACCEPT_LANGUAGE, "en-US")
            .send()?
            .json()?;
        Ok(parse_app_details(app_id, &body))
    }
}

/// Extracts the entry from an `appdetails` response body, shaped
/// `{"<id>": {"success": true, "data": {"name": .., "developers": [..]}}}`.
pub fn parse_app_details(app_id: u32, body: &Value) -> Option<CatalogEntry> {
    let record = body.get(app_id.to_string())?;
    if !record.get("success").and_then(Value::as_bool).unwrap_or(false) {
        return None;
    }
    let data = record.get("data");
    let name = data
        .and_then(|d| d.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_name(app_id));
    let developers = data
        .and_then(|d| d.get("developers"))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    Some(CatalogEntry { name, developers })
}
