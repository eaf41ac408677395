//! Export outcome tracking.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Result of processing one listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOutcome {
    /// The node was converted and written to the path.
    Exported(PathBuf),
    /// The output file already existed; nothing was fetched.
    Skipped(PathBuf),
    /// The node could not be exported.
    Failed { link: String, reason: String },
}

/// A node that failed to export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFailure {
    pub link: String,
    pub reason: String,
}

/// Statistics for a whole run.
#[derive(Debug)]
pub struct RunSummary {
    pub exported: u64,
    pub skipped: u64,
    pub failures: Vec<NodeFailure>,
    pub pages_processed: u32,
    pub content_types: usize,

    /// Set when the run stopped early on a failed node.
    pub aborted: bool,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            exported: 0,
            skipped: 0,
            failures: Vec::new(),
            pages_processed: 0,
            content_types: 0,
            aborted: false,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Count a node outcome.
    pub fn record(&mut self, outcome: &NodeOutcome) {
        match outcome {
            NodeOutcome::Exported(_) => self.exported += 1,
            NodeOutcome::Skipped(_) => self.skipped += 1,
            NodeOutcome::Failed { link, reason } => self.failures.push(NodeFailure {
                link: link.clone(),
                reason: reason.clone(),
            }),
        }
    }

    /// Mark a listing page as fully processed.
    pub fn mark_page_done(&mut self) {
        self.pages_processed += 1;
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn failed(&self) -> u64 {
        self.failures.len() as u64
    }

    /// Get total node count.
    pub fn total_nodes(&self) -> u64 {
        self.exported + self.skipped + self.failed()
    }

    /// Time between start and finish (or now, while still running).
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at.unwrap_or_else(Utc::now) - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut summary = RunSummary::new();
        summary.record(&NodeOutcome::Exported(PathBuf::from("export/1_page_A.docx")));
        summary.record(&NodeOutcome::Skipped(PathBuf::from("export/2_page_B.docx")));
        summary.record(&NodeOutcome::Skipped(PathBuf::from("export/3_page_C.docx")));
        summary.record(&NodeOutcome::Failed {
            link: "/node/4".into(),
            reason: "Unknown content type: 'Poll'".into(),
        });

        assert_eq!(summary.exported, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.total_nodes(), 4);
        assert_eq!(summary.failures[0].link, "/node/4");
    }

    #[test]
    fn test_elapsed_after_finish() {
        let mut summary = RunSummary::new();
        summary.finish();
        assert!(summary.elapsed() >= chrono::Duration::zero());
        assert!(summary.finished_at.is_some());
    }
}
