/// Trait for reporting discovery progress.
///
/// The CLI implements it with indicatif spinners. Roots may report from
/// rayon worker threads, hence `Send + Sync`. All methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    fn on_lookup_start(&self, _app_id: u32) {}
    fn on_lookup_complete(&self, _display_name: &str) {}
    fn on_scan_start(&self, _total_roots: usize) {}
    fn on_root_scanned(&self, _root: &str, _directories_visited: usize) {}
    fn on_scan_complete(&self, _candidates: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
