// ── Runtime monitoring configuration ──
//
// Tuning for how the surrounding application feeds snapshots into the
// store. The embedding layer owns files and flags; core only sees values.

use std::time::Duration;

/// Configuration for the snapshot pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Quiet window for collapsing bursts of snapshots into one rebuild.
    /// Zero applies every snapshot immediately.
    pub debounce_window: Duration,
    /// Age after which the held snapshot counts as stale.
    pub stale_after: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(300),
            stale_after: Duration::from_secs(60),
        }
    }
}
