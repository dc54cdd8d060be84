use crate::analysis::{self, Verdict};
use crate::config::AppConfig;
use crate::error::Error;
use crate::identity::ApplicationIdentity;
use crate::models::{CandidatePath, CandidateSource, ScanRoot};
use crate::platform::{self, HostPaths};
use crate::progress::ProgressReporter;
use crate::scanner::{self, MAX_SCAN_DEPTH};
use crate::services::{
    CatalogService, OfflineCatalog, OfflineWiki, PcGamingWikiHints, SteamStoreCatalog,
    WikiHintService,
};
use crate::settings::{self, SettingsStore};
use glob::Pattern;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct SaveLocator {
    config: AppConfig,
    host: HostPaths,
    store: Box<dyn SettingsStore>,
    catalog: Box<dyn CatalogService>,
    wiki: Box<dyn WikiHintService>,
}

/// Everything one discovery run produced.
#[derive(Debug, Serialize)]
pub struct DiscoveryReport {
    pub identity: ApplicationIdentity,
    /// Sorted, duplicate-free save location candidates.
    pub results: Vec<String>,
    /// Accepted candidates before deduplication, with their source.
    pub candidates: Vec<CandidatePath>,
    /// Non-fatal problems worth showing to the user.
    pub warnings: Vec<String>,
    pub stats: ScanStats,
}

#[derive(Debug, Default, Serialize)]
pub struct ScanStats {
    pub roots_scanned: usize,
    pub directories_visited: usize,
    pub suppressed_by_parent: usize,
    pub scan_duration: Duration,
}

#[derive(Debug, Default)]
struct RootScan {
    visited: usize,
    suppressed: usize,
    accepted: Vec<CandidatePath>,
}

/// Parses user input into an app id. The only fatal error of a run.
pub fn parse_app_id(input: &str) -> Result<u32, Error> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| Error::InvalidAppId(trimmed.to_string()))
}

impl SaveLocator {
    /// Locator for the current host: native settings store, and the Steam
    /// store and PCGamingWiki unless `config.offline` is set.
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let (catalog, wiki): (Box<dyn CatalogService>, Box<dyn WikiHintService>) =
            if config.offline {
                (Box::new(OfflineCatalog), Box::new(OfflineWiki))
            } else {
                (
                    Box::new(SteamStoreCatalog::new(&config)?),
                    Box::new(PcGamingWikiHints::new(&config)?),
                )
            };
        Ok(Self {
            config,
            host: HostPaths::detect(),
            store: settings::default_store(),
            catalog,
            wiki,
        })
    }

    pub fn with_host(mut self, host: HostPaths) -> Self {
        self.host = host;
        self
    }

    pub fn with_settings_store(mut self, store: impl SettingsStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn with_catalog(mut self, catalog: impl CatalogService + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    pub fn with_wiki(mut self, wiki: impl WikiHintService + 'static) -> Self {
        self.wiki = Box::new(wiki);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the discovery pipeline:
    /// 1. Resolve the app identity from the catalog (fallback on failure)
    /// 2. Collect Steam Cloud folders for the app
    /// 3. Walk every scan root and classify each directory
    /// 4. Check the wiki's save-game hint
    /// 5. Deduplicate and sort everything
    pub fn locate(&self, app_id: u32, reporter: &dyn ProgressReporter) -> DiscoveryReport {
        let mut warnings = Vec::new();

        reporter.on_lookup_start(app_id);
        let identity = self.resolve_identity(app_id, &mut warnings);
        reporter.on_lookup_complete(&identity.display_name);
        info!("Searching for: {}", identity.display_name);

        let mut candidates: Vec<CandidatePath> =
            scanner::find_cloud_roots(self.store.as_ref(), &self.host, app_id)
                .into_iter()
                .map(|root| CandidatePath::accepted(root.path, CandidateSource::CloudSync))
                .collect();
        debug!("{} Steam Cloud folders", candidates.len());

        let roots =
            scanner::enumerate_roots(&self.host, self.store.as_ref(), &identity, &self.config);
        let ignore_patterns = scanner::compile_ignore_patterns(&self.config.ignore_patterns);

        info!("Scanning {} roots...", roots.len());
        reporter.on_scan_start(roots.len());
        let scan_start = Instant::now();
        let scans = self.scan_roots(&roots, &identity, &ignore_patterns, reporter);
        let scan_duration = scan_start.elapsed();

        let mut stats = ScanStats {
            roots_scanned: roots.len(),
            scan_duration,
            ..ScanStats::default()
        };
        for scan in scans {
            stats.directories_visited += scan.visited;
            stats.suppressed_by_parent += scan.suppressed;
            candidates.extend(scan.accepted);
        }

        candidates.extend(self.wiki_candidate(app_id));

        let results = analysis::resolve_overlaps(candidates.iter().cloned());
        reporter.on_scan_complete(results.len(), scan_duration.as_secs_f64());
        debug!(
            "Scan completed in {:.2}s, {} directories, {} results",
            scan_duration.as_secs_f64(),
            stats.directories_visited,
            results.len(),
        );

        DiscoveryReport {
            identity,
            results,
            candidates,
            warnings,
            stats,
        }
    }

    fn resolve_identity(&self, app_id: u32, warnings: &mut Vec<String>) -> ApplicationIdentity {
        match self.catalog.fetch_identity(app_id) {
            Ok(Some(entry)) => ApplicationIdentity::new(app_id, &entry.name, entry.developers),
            Ok(None) => {
                debug!("Catalog has no record of {}", app_id);
                ApplicationIdentity::fallback(app_id)
            }
            Err(err) => {
                let message = format!("Couldn't fetch game info from Steam: {}", err);
                warn!("{}", message);
                warnings.push(message);
                ApplicationIdentity::fallback(app_id)
            }
        }
    }

    fn scan_roots(
        &self,
        roots: &[ScanRoot],
        identity: &ApplicationIdentity,
        ignore_patterns: &[Pattern],
        reporter: &dyn ProgressReporter,
    ) -> Vec<RootScan> {
        let run = |root: &ScanRoot| {
            let scan = scan_root(root, identity, ignore_patterns);
            reporter.on_root_scanned(&root.path.to_string_lossy(), scan.visited);
            scan
        };
        if self.config.parallel {
            roots.par_iter().map(run).collect()
        } else {
            roots.iter().map(run).collect()
        }
    }

    fn wiki_candidate(&self, app_id: u32) -> Option<CandidatePath> {
        let hint = match self.wiki.fetch_save_hint(app_id) {
            Ok(Some(hint)) => hint,
            Ok(None) => return None,
            Err(err) => {
                debug!("Wiki lookup failed: {}", err);
                return None;
            }
        };
        let path = PathBuf::from(platform::expand_env_vars(&hint));
        if !path.exists() {
            debug!("Wiki save location does not exist: {}", path.display());
            return None;
        }
        Some(CandidatePath::accepted(path, CandidateSource::WikiHint))
    }
}

fn scan_root(root: &ScanRoot, identity: &ApplicationIdentity, ignore_patterns: &[Pattern]) -> RootScan {
    let mut scan = RootScan::default();
    for dir in scanner::walk_dirs(&root.path, MAX_SCAN_DEPTH, ignore_patterns) {
        scan.visited += 1;
        match analysis::classify(&dir, identity) {
            Verdict::Accepted => scan
                .accepted
                .push(CandidatePath::accepted(dir, CandidateSource::SystemScan)),
            Verdict::SuppressedByParent => scan.suppressed += 1,
            Verdict::Rejected => {}
        }
    }
    debug!(
        "{:?} root {}: {} directories, {} accepted",
        root.origin,
        root.path.display(),
        scan.visited,
        scan.accepted.len()
    );
    scan
}
