//! Hierarchical settings store access (the Windows registry, or nothing).
//!
//! The store is modelled as a root with immediate subkeys, each holding
//! string values. Only one level is ever enumerated.

use std::io;
use tracing::debug;

/// Key holding the Steam client's install location.
pub const STEAM_KEY: &str = r"Software\Valve\Steam";
pub const STEAM_PATH_VALUE: &str = "SteamPath";

pub trait SettingsStore: Send + Sync {
    /// Names of the immediate subkeys of the store root.
    fn subkeys(&self) -> io::Result<Vec<String>>;

    /// String data of every value directly under `subkey`.
    fn values(&self, subkey: &str) -> io::Result<Vec<String>>;

    /// A single string value, `None` when the key or value is absent.
    fn read_string(&self, key: &str, name: &str) -> io::Result<Option<String>>;
}

/// Store for hosts without a registry. Everything is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSettingsStore;

impl SettingsStore for NullSettingsStore {
    fn subkeys(&self) -> io::Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn values(&self, _subkey: &str) -> io::Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn read_string(&self, _key: &str, _name: &str) -> io::Result<Option<String>> {
        Ok(None)
    }
}

/// The native store of the current host.
pub fn default_store() -> Box<dyn SettingsStore> {
    #[cfg(target_os = "windows")]
    {
        Box::new(crate::platform::windows::WindowsRegistry)
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(NullSettingsStore)
    }
}

/// Lazily yields every value under the store root's subkeys whose text
/// contains `term`, compared case-insensitively.
///
/// A subkey that cannot be read is skipped; its siblings are still searched.
pub fn search_values<'a>(
    store: &'a dyn SettingsStore,
    term: &str,
) -> impl Iterator<Item = String> + 'a {
    let needle = term.to_lowercase();

    let subkeys = match store.subkeys() {
        Ok(keys) => keys,
        Err(err) => {
            debug!("Settings store root not readable: {}", err);
            Vec::new()
        }
    };

    subkeys
        .into_iter()
        .flat_map(move |subkey| match store.values(&subkey) {
            Ok(values) => values,
            Err(err) => {
                debug!("Skipping settings key '{}': {}", subkey, err);
                Vec::new()
            }
        })
        .filter(move |value| !needle.is_empty() && value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct FakeStore {
        keys: BTreeMap<&'static str, Option<Vec<&'static str>>>,
    }

    impl SettingsStore for FakeStore {
        fn subkeys(&self) -> io::Result<Vec<String>> {
            Ok(self.keys.keys().map(|k| k.to_string()).collect())
        }

        fn values(&self, subkey: &str) -> io::Result<Vec<String>> {
            match self.keys.get(subkey) {
                Some(Some(values)) => Ok(values.iter().map(|v| v.to_string()).collect()),
                Some(None) => Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
                None => Err(io::Error::new(io::ErrorKind::NotFound, "missing")),
            }
        }

        fn read_string(&self, _key: &str, _name: &str) -> io::Result<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn test_failing_subkey_does_not_hide_siblings() {
        let mut keys = BTreeMap::new();
        keys.insert("AppEvents", Some(vec![r"C:\Games\Hollow Knight\saves"]));
        keys.insert("Locked", None);
        keys.insert("Software", Some(vec!["unrelated", r"D:\HOLLOW KNIGHT"]));
        let store = FakeStore { keys };

        let found: Vec<String> = search_values(&store, "Hollow Knight").collect();
        assert_eq!(
            found,
            vec![
                r"C:\Games\Hollow Knight\saves".to_string(),
                r"D:\HOLLOW KNIGHT".to_string()
            ]
        );
    }

    #[test]
    fn test_null_store_is_empty() {
        assert_eq!(search_values(&NullSettingsStore, "anything").count(), 0);
        assert_eq!(
            NullSettingsStore.read_string(STEAM_KEY, STEAM_PATH_VALUE).unwrap(),
            None
        );
    }

    #[test]
    fn test_empty_term_matches_nothing() {
        let mut keys = BTreeMap::new();
        keys.insert("Software", Some(vec!["value"]));
        let store = FakeStore { keys };
        assert_eq!(search_values(&store, "").count(), 0);
    }
}
