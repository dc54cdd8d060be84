use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

/// Deepest level below a root that a system scan visits.
pub const MAX_SCAN_DEPTH: usize = 4;

/// Compiles glob ignore patterns, logging and dropping invalid ones.
pub fn compile_ignore_patterns(globs: &[String]) -> Vec<Pattern> {
    globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect()
}

/// Lazily yields every directory below `root`, from depth 1 down to
/// `max_depth`. Entries are visited in file-name order, symlinks are not
/// followed, and directories matching an ignore pattern are pruned with
/// their subtree.
///
/// Unreadable subtrees are skipped; a missing root yields nothing.
pub fn walk_dirs<'a>(
    root: &Path,
    max_depth: usize,
    ignore_patterns: &'a [Pattern],
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            !ignore_patterns
                .iter()
                .any(|pattern| pattern.matches_path(entry.path()))
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
}
