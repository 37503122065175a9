use std::fmt;

use crate::error::DownloadError;

/// What happened to a single download job.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// The file was fetched and written.
    Success,
    /// The destination already existed; no network I/O was performed.
    SkippedExisting,
    /// The job failed; siblings are unaffected.
    Failed(DownloadError),
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DownloadOutcome::SkippedExisting)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DownloadOutcome::Failed(_))
    }
}

/// Per-job outcomes of a whole batch, ordered by job position regardless of
/// completion order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempted, {} downloaded, {} skipped, {} failed",
            self.attempted(),
            self.succeeded(),
            self.skipped(),
            self.failed()
        )
    }
}
