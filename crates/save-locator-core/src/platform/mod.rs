#[cfg(target_os = "windows")]
pub mod windows;

use regex::{Captures, Regex};
use std::env;
use std::path::{Component, Path, PathBuf};

lazy_static::lazy_static! {
    static ref ENV_REFERENCE: Regex =
        Regex::new(r"%([A-Za-z_][A-Za-z0-9_()]*)%|\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
            .unwrap();
}

/// Locations of the current user that the scan depends on.
#[derive(Debug, Clone, Default)]
pub struct HostPaths {
    /// The user profile directory. `None` disables the fixed roots.
    pub home: Option<PathBuf>,
    /// Steam install locations tried when the settings store has none.
    pub steam_fallbacks: Vec<PathBuf>,
}

impl HostPaths {
    pub fn detect() -> Self {
        let home = env::var_os("USERPROFILE")
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        let steam_fallbacks = home
            .as_deref()
            .map(conventional_steam_dirs)
            .unwrap_or_default();
        Self {
            home,
            steam_fallbacks,
        }
    }

    /// Host rooted at `home`, with no Steam fallbacks.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            steam_fallbacks: Vec::new(),
        }
    }
}

/// Where Steam usually lives when no registry records it.
pub fn conventional_steam_dirs(home: &Path) -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        return Vec::new();
    }
    vec![
        home.join(".local/share/Steam"),
        // Symlink maintained by the Steam runtime
        home.join(".steam/steam"),
        home.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"),
        home.join("Library/Application Support/Steam"),
    ]
}

/// Number of path parts, counting a drive prefix and its root as one part
/// (`C:\Users\me` and `/home/me` both have three).
pub fn path_depth(path: &Path) -> usize {
    let mut depth = 0;
    let mut saw_prefix = false;
    for component in path.components() {
        match component {
            Component::Prefix(_) => {
                saw_prefix = true;
                depth += 1;
            }
            Component::RootDir if saw_prefix => {}
            _ => depth += 1,
        }
    }
    depth
}

/// Expands `%VAR%`, `${VAR}` and `$VAR` references from the process
/// environment. Unknown variables are left as written.
pub fn expand_env_vars(input: &str) -> String {
    expand_with(input, |name| env::var(name).ok())
}

pub fn expand_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ENV_REFERENCE
        .replace_all(input, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
