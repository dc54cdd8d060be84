pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod models;
pub mod platform;
pub mod progress;
pub mod scanner;
pub mod services;
pub mod settings;

pub use config::AppConfig;
pub use engine::{parse_app_id, DiscoveryReport, SaveLocator, ScanStats};
pub use error::Error;
pub use identity::ApplicationIdentity;
pub use models::{CandidatePath, CandidateSource, RootOrigin, ScanRoot};
pub use progress::{ProgressReporter, SilentReporter};
