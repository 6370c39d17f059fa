use chrono::{DateTime, Local};
use serde::Serialize;

/// Progress of the background refresh.
///
/// Only the refresh coordinator mutates this; everybody else reads snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchStatus {
    pub in_progress: bool,
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    pub message: String,
    pub last_fetch: Option<DateTime<Local>>,
}

impl FetchStatus {
    /// Reset counters at the start of a refresh over `total` tickers
    pub fn begin(&mut self, total: usize) {
        self.in_progress = true;
        self.total = total;
        self.completed = 0;
        self.failed = 0;
        self.message = "Starting...".to_string();
        self.last_fetch = None;
    }

    /// Mark the refresh finished and stamp the completion time
    pub fn finish(&mut self) {
        self.in_progress = false;
        self.last_fetch = Some(Local::now());
        self.message = format!("Done: {} loaded, {} failed", self.completed, self.failed);
    }

    /// `YYYY-MM-DD HH:MM`, or `None` before the first completed refresh
    pub fn last_fetch_display(&self) -> Option<String> {
        self.last_fetch
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
    }
}
