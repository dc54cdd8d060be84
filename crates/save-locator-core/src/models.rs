use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub const WIKI_HINT_PREFIX: &str = "PCGamingWiki: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandidateSource {
    CloudSync,
    SystemScan,
    WikiHint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RootOrigin {
    FixedConvention,
    RegistryHint,
    CloudSyncConvention,
    Configured,
}

/// A directory the scan starts from. Consumed once by the walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRoot {
    pub path: PathBuf,
    pub origin: RootOrigin,
}

impl ScanRoot {
    pub fn new(path: impl Into<PathBuf>, origin: RootOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }
}

/// A directory judged (or rejected) as a save location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidatePath {
    pub path: PathBuf,
    pub source: CandidateSource,
    pub valid: bool,
}

impl CandidatePath {
    pub fn accepted(path: impl Into<PathBuf>, source: CandidateSource) -> Self {
        Self {
            path: path.into(),
            source,
            valid: true,
        }
    }

    /// Result-set form: the plain path, wiki hints carry a provenance prefix.
    pub fn render(&self) -> String {
        match self.source {
            CandidateSource::WikiHint => format!("{}{}", WIKI_HINT_PREFIX, self.path.display()),
            CandidateSource::CloudSync | CandidateSource::SystemScan => {
                self.path.display().to_string()
            }
        }
    }
}

impl fmt::Display for CandidatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CandidateSource::CloudSync => "steam cloud",
            CandidateSource::SystemScan => "system scan",
            CandidateSource::WikiHint => "pcgamingwiki",
        };
        f.write_str(label)
    }
}
