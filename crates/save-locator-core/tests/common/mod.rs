#![allow(dead_code)]

use save_locator_core::services::{CatalogEntry, CatalogService, WikiHintService};
use save_locator_core::settings::SettingsStore;
use save_locator_core::Error;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory whose own path passes the classifier's exclusion
/// filter. The system temp dir on Windows lives under `...\Temp`, which
/// is excluded, so the target tmp dir is used there.
pub fn scratch_dir() -> TempDir {
    let system = std::env::temp_dir().to_string_lossy().to_lowercase();
    if ["windows", "temp", "program files"]
        .iter()
        .any(|noise| system.contains(noise))
    {
        tempfile::tempdir_in(env!("CARGO_TARGET_TMPDIR")).unwrap()
    } else {
        tempfile::tempdir().unwrap()
    }
}

pub fn make_dir(path: &Path) -> PathBuf {
    fs::create_dir_all(path).unwrap();
    path.to_path_buf()
}

pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"save").unwrap();
}

/// Catalog stand-in answering with a fixed name, or failing.
pub struct FixedCatalog(pub Option<&'static str>);

impl CatalogService for FixedCatalog {
    fn fetch_identity(&self, _app_id: u32) -> Result<Option<CatalogEntry>, Error> {
        match self.0 {
            Some(name) => Ok(Some(CatalogEntry {
                name: name.to_string(),
                developers: vec!["Team Cherry".to_string()],
            })),
            None => Err(Error::Other("catalog unreachable".to_string())),
        }
    }
}

pub struct FixedWiki(pub Option<String>);

impl WikiHintService for FixedWiki {
    fn fetch_save_hint(&self, _app_id: u32) -> Result<Option<String>, Error> {
        Ok(self.0.clone())
    }
}

/// In-memory settings store. A subkey mapped to `None` fails to enumerate.
#[derive(Default)]
pub struct MemoryStore {
    pub keys: BTreeMap<String, Option<Vec<String>>>,
    pub steam_path: Option<PathBuf>,
}

impl MemoryStore {
    pub fn with_key(mut self, name: &str, values: Option<Vec<String>>) -> Self {
        self.keys.insert(name.to_string(), values);
        self
    }
}

impl SettingsStore for MemoryStore {
    fn subkeys(&self) -> io::Result<Vec<String>> {
        Ok(self.keys.keys().cloned().collect())
    }

    fn values(&self, subkey: &str) -> io::Result<Vec<String>> {
        match self.keys.get(subkey) {
            Some(Some(values)) => Ok(values.clone()),
            Some(None) => Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied")),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such key")),
        }
    }

    fn read_string(&self, _key: &str, _name: &str) -> io::Result<Option<String>> {
        Ok(self
            .steam_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()))
    }
}
