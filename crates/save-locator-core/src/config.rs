use crate::error::Error;
use config::{Config, Environment, File as ConfigFile};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://store.steampowered.com/api/appdetails";
pub const DEFAULT_WIKI_URL: &str = "https://www.pcgamingwiki.com/api/appid";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Additional directories scanned alongside the built-in roots.
    pub extra_roots: Vec<String>,
    /// Glob patterns; matching directories are pruned from the walk.
    pub ignore_patterns: Vec<String>,
    pub http_timeout_secs: u64,
    pub catalog_url: String,
    pub wiki_url: String,
    /// Skip both network lookups.
    pub offline: bool,
    /// Walk roots on the rayon pool instead of one after another.
    pub parallel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extra_roots: Vec::new(),
            ignore_patterns: Vec::new(),
            http_timeout_secs: 10,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            wiki_url: DEFAULT_WIKI_URL.to_string(),
            offline: false,
            parallel: true,
        }
    }
}

impl AppConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Loads `Config.toml` from the working directory (optional), then applies
/// `SAVE_LOCATOR_*` environment overrides.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let settings = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(
            Environment::with_prefix("SAVE_LOCATOR")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("extra_roots")
                .with_list_parse_key("ignore_patterns"),
        )
        .build()?;
    Ok(settings.try_deserialize::<AppConfig>()?)
}
