use crate::identity::{first_digit_run, first_word, ApplicationIdentity};
use crate::platform::path_depth;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::trace;

/// Lowercase path fragments that mark system or noise locations.
const EXCLUDED_FRAGMENTS: &[&str] = &[
    "windows",
    "program files",
    "temp",
    "$recycle.bin",
    "crashlog",
];

/// Paths with more parts than this are never save locations.
pub const MAX_PATH_DEPTH: usize = 10;

/// Extensions (lowercase, no dot) of files that look like save data.
pub const SAVE_EXTENSIONS: &[&str] = &["sav", "save", "dat", "bin", "json", "profile"];

lazy_static::lazy_static! {
    // Numbered save slot folders such as `.1911`
    static ref NUMBERED_SLOT: Regex = Regex::new(r"^\.\d+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Rejected,
    Accepted,
    /// Valid, but its parent is valid too and is kept instead.
    SuppressedByParent,
}

/// Classifies `path` and applies one level of ancestor suppression.
pub fn classify(path: &Path, identity: &ApplicationIdentity) -> Verdict {
    classify_with_lookback(path, identity, 1)
}

fn classify_with_lookback(path: &Path, identity: &ApplicationIdentity, lookback: u8) -> Verdict {
    if !is_valid_save_location(path, identity) {
        return Verdict::Rejected;
    }
    if lookback == 0 {
        return Verdict::Accepted;
    }
    match path.parent() {
        Some(parent)
            if classify_with_lookback(parent, identity, lookback - 1) == Verdict::Accepted =>
        {
            trace!("{} suppressed by its parent", path.display());
            Verdict::SuppressedByParent
        }
        _ => Verdict::Accepted,
    }
}

/// Whether `path` plausibly holds the application's saves, judged on its
/// own (no ancestor suppression).
pub fn is_valid_save_location(path: &Path, identity: &ApplicationIdentity) -> bool {
    let path_lower = path.to_string_lossy().to_lowercase();

    if is_excluded(&path_lower) || path_depth(path) > MAX_PATH_DEPTH {
        return false;
    }

    if is_mismatched_sequel(&path_lower, identity) {
        return false;
    }

    let name = identity.match_name();
    let Some(first_word) = first_word(&name) else {
        return false;
    };
    let collapsed = path_lower.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.contains(first_word) {
        return false;
    }

    if !path_lower.contains(&name) {
        return false;
    }

    parent_is_numbered_slot(path) || has_save_files(path)
}

pub fn is_excluded(path_lower: &str) -> bool {
    EXCLUDED_FRAGMENTS
        .iter()
        .any(|fragment| path_lower.contains(fragment))
}

/// True when the text after the first occurrence of the name's first word
/// carries a number that disagrees with the name's own number: `Game`
/// against `game 2/`, or `Game 2` against `game 3/`. Only the first digit
/// run on each side is compared.
pub fn is_mismatched_sequel(path_lower: &str, identity: &ApplicationIdentity) -> bool {
    let name = identity.match_name();
    let Some(first_word) = first_word(&name) else {
        return false;
    };
    let Some((_, after_name)) = path_lower.split_once(first_word) else {
        return false;
    };

    match (
        first_digit_run(&name),
        first_digit_run(after_name),
    ) {
        (None, Some(_)) => true,
        (Some(name_number), Some(path_number)) => name_number != path_number,
        _ => false,
    }
}

fn parent_is_numbered_slot(path: &Path) -> bool {
    path.parent()
        .and_then(|parent| parent.file_name())
        .map(|name| NUMBERED_SLOT.is_match(&name.to_string_lossy()))
        .unwrap_or(false)
}

/// Whether `dir` directly contains a file with a save extension. Unreadable
/// directories count as having none.
pub fn has_save_files(dir: &Path) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };
    entries.flatten().any(|entry| {
        let path = entry.path();
        path.is_file()
            && path
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    SAVE_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
    })
}
