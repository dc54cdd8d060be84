use crate::config::AppConfig;
use crate::identity::ApplicationIdentity;
use crate::models::{RootOrigin, ScanRoot};
use crate::platform::HostPaths;
use crate::settings::{self, SettingsStore};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Profile-relative folders where games conventionally keep saves.
const PROFILE_SAVE_DIRS: &[&str] = &[
    "Documents",
    "Saved Games",
    "AppData/Local",
    "AppData/LocalLow",
    "AppData/Roaming",
    "My Games",
];

#[cfg(not(target_os = "windows"))]
const UNIX_DATA_DIRS: &[&str] = &[".local/share", ".config", "Library/Application Support"];

/// Builds the roots for a system scan: fixed profile conventions, paths
/// found in the settings store, then configured extra roots.
///
/// Roots are not deduplicated; walking the same tree twice is harmless.
pub fn enumerate_roots(
    host: &HostPaths,
    store: &dyn SettingsStore,
    identity: &ApplicationIdentity,
    config: &AppConfig,
) -> Vec<ScanRoot> {
    let mut roots = Vec::new();
    if let Some(home) = host.home.as_deref() {
        roots.extend(fixed_convention_roots(home));
    }
    roots.extend(registry_hint_roots(store, identity));
    roots.extend(configured_roots(&config.extra_roots));
    roots
}

pub fn fixed_convention_roots(home: &Path) -> Vec<ScanRoot> {
    #[allow(unused_mut)]
    let mut roots: Vec<ScanRoot> = PROFILE_SAVE_DIRS
        .iter()
        .map(|dir| ScanRoot::new(home.join(dir), RootOrigin::FixedConvention))
        .collect();

    #[cfg(not(target_os = "windows"))]
    roots.extend(
        UNIX_DATA_DIRS
            .iter()
            .map(|dir| ScanRoot::new(home.join(dir), RootOrigin::FixedConvention)),
    );

    roots
}

/// Settings-store values mentioning the application's name that point at
/// an existing directory.
pub fn registry_hint_roots(
    store: &dyn SettingsStore,
    identity: &ApplicationIdentity,
) -> Vec<ScanRoot> {
    settings::search_values(store, &identity.display_name)
        .map(|value| PathBuf::from(value.trim().trim_matches('"')))
        .filter(|path| path.is_dir())
        .inspect(|path| debug!("Settings store hint: {}", path.display()))
        .map(|path| ScanRoot::new(path, RootOrigin::RegistryHint))
        .collect()
}

pub fn configured_roots(extra_roots: &[String]) -> Vec<ScanRoot> {
    extra_roots
        .iter()
        .map(PathBuf::from)
        .filter(|path| {
            let exists = path.is_dir();
            if !exists {
                debug!("Configured root does not exist: {}", path.display());
            }
            exists
        })
        .map(|path| ScanRoot::new(path, RootOrigin::Configured))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::NullSettingsStore;
    use std::fs;
    use std::io;
    use tempfile::tempdir;

    struct OneKeyStore(Vec<String>);

    impl SettingsStore for OneKeyStore {
        fn subkeys(&self) -> io::Result<Vec<String>> {
            Ok(vec!["Software".to_string()])
        }
        fn values(&self, _subkey: &str) -> io::Result<Vec<String>> {
            Ok(self.0.clone())
        }
        fn read_string(&self, _key: &str, _name: &str) -> io::Result<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn test_fixed_roots_under_home() {
        let roots = fixed_convention_roots(Path::new("/home/me"));
        assert!(roots.iter().all(|r| r.origin == RootOrigin::FixedConvention));
        assert!(roots
            .iter()
            .any(|r| r.path == Path::new("/home/me").join("Saved Games")));
        assert!(roots
            .iter()
            .any(|r| r.path == Path::new("/home/me").join("AppData/LocalLow")));
    }

    #[test]
    fn test_registry_hints_keep_existing_directories() {
        let tmp = tempdir().unwrap();
        let game_dir = tmp.path().join("Hollow Knight");
        fs::create_dir_all(&game_dir).unwrap();
        let file_hint = tmp.path().join("Hollow Knight.exe");
        fs::write(&file_hint, "").unwrap();

        let store = OneKeyStore(vec![
            format!("\"{}\"", game_dir.display()),
            file_hint.display().to_string(),
            "/nowhere/Hollow Knight".to_string(),
        ]);
        let identity = ApplicationIdentity::new(367520, "Hollow Knight", Vec::new());

        let roots = registry_hint_roots(&store, &identity);
        assert_eq!(roots, vec![ScanRoot::new(game_dir, RootOrigin::RegistryHint)]);
    }

    #[test]
    fn test_enumerate_without_home_or_store() {
        let identity = ApplicationIdentity::fallback(1);
        let roots = enumerate_roots(
            &HostPaths::default(),
            &NullSettingsStore,
            &identity,
            &AppConfig::default(),
        );
        assert!(roots.is_empty());
    }

    #[test]
    fn test_configured_roots_must_exist() {
        let tmp = tempdir().unwrap();
        let extra = vec![
            tmp.path().display().to_string(),
            tmp.path().join("missing").display().to_string(),
        ];
        let roots = configured_roots(&extra);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].origin, RootOrigin::Configured);
    }
}
