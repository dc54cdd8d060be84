use crate::models::{RootOrigin, ScanRoot};
use crate::platform::HostPaths;
use crate::settings::{SettingsStore, STEAM_KEY, STEAM_PATH_VALUE};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Per-app folders Steam Cloud keeps under each user.
pub const STEAM_CLOUD_DIRS: &[&str] = &["remote", "storage"];

/// Steam's install directory: the registry value first, then the host's
/// conventional locations.
pub fn steam_install_dir(store: &dyn SettingsStore, host: &HostPaths) -> Option<PathBuf> {
    match store.read_string(STEAM_KEY, STEAM_PATH_VALUE) {
        Ok(Some(path)) => return Some(PathBuf::from(path)),
        Ok(None) => {}
        Err(err) => debug!("Could not read {}\\{}: {}", STEAM_KEY, STEAM_PATH_VALUE, err),
    }
    host.steam_fallbacks.iter().find(|p| p.is_dir()).cloned()
}

/// Existing `userdata/{user}/{app_id}/{remote,storage}` directories.
///
/// Never fails: a missing client or unreadable `userdata` yields nothing.
pub fn find_cloud_roots(store: &dyn SettingsStore, host: &HostPaths, app_id: u32) -> Vec<ScanRoot> {
    let Some(steam_dir) = steam_install_dir(store, host) else {
        debug!("Steam installation not found");
        return Vec::new();
    };

    let userdata = steam_dir.join("userdata");
    let entries = match fs::read_dir(&userdata) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Cannot read {}: {}", userdata.display(), err);
            return Vec::new();
        }
    };

    let mut users: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    users.sort();

    users
        .iter()
        .flat_map(|user| {
            STEAM_CLOUD_DIRS
                .iter()
                .map(move |cloud_dir| user.join(app_id.to_string()).join(cloud_dir))
        })
        .filter(|path| path.exists())
        .map(|path| ScanRoot::new(path, RootOrigin::CloudSyncConvention))
        .collect()
}
