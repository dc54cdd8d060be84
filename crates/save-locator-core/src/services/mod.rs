//! Remote lookups the engine depends on, behind narrow traits so the scan
//! can run against stand-ins.

pub mod pcgamingwiki;
pub mod steam_store;

use crate::error::Error;

pub use pcgamingwiki::PcGamingWikiHints;
pub use steam_store::SteamStoreCatalog;

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 save-locator";

/// Name and developer data for an app, as the catalog reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub developers: Vec<String>,
}

pub trait CatalogService: Send + Sync {
    /// `Ok(None)` when the catalog answers but has no record of the id.
    fn fetch_identity(&self, app_id: u32) -> Result<Option<CatalogEntry>, Error>;
}

pub trait WikiHintService: Send + Sync {
    /// The raw `save_game` location for the id, unexpanded.
    fn fetch_save_hint(&self, app_id: u32) -> Result<Option<String>, Error>;
}

/// Catalog that never knows anything. Used in offline mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineCatalog;

impl CatalogService for OfflineCatalog {
    fn fetch_identity(&self, _app_id: u32) -> Result<Option<CatalogEntry>, Error> {
        Ok(None)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineWiki;

impl WikiHintService for OfflineWiki {
    fn fetch_save_hint(&self, _app_id: u32) -> Result<Option<String>, Error> {
        Ok(None)
    }
}
