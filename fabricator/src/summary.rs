//! End-of-run counters
//!
//! Human-readable breakdown of the generated batch, logged when a run
//! finishes. Cosmetic only; nothing downstream parses this.

use std::collections::HashMap;

use shared::{Issue, IssueStatus};

/// Counters over one generated batch
#[derive(Debug, Default)]
pub struct RunSummary {
    pub generated: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub with_images: usize,
    pub anonymous: usize,
    /// Issues whose id is shared with at least one other batch member
    pub duplicate_members: usize,
}

impl RunSummary {
    pub fn from_batch(issues: &[Issue]) -> Self {
        let mut summary = Self {
            generated: issues.len(),
            ..Self::default()
        };

        let mut id_counts: HashMap<&str, usize> = HashMap::new();
        for issue in issues {
            *id_counts.entry(issue.id.as_str()).or_default() += 1;
            match issue.status {
                IssueStatus::Pending => summary.pending += 1,
                IssueStatus::InProgress => summary.in_progress += 1,
                IssueStatus::Resolved => summary.resolved += 1,
            }
            if issue.image_path.is_some() {
                summary.with_images += 1;
            }
            if issue.is_anonymous {
                summary.anonymous += 1;
            }
        }
        summary.duplicate_members = issues
            .iter()
            .filter(|issue| id_counts[issue.id.as_str()] > 1)
            .count();

        summary
    }

    /// Log the breakdown plus store totals.
    pub fn log(&self, existing: usize, total: usize) {
        tracing::info!("✅ generated {} new issues", self.generated);
        tracing::info!("store: {} existing + {} new = {} total", existing, self.generated, total);
        tracing::info!(
            "status: {} pending / {} in progress / {} resolved",
            self.pending,
            self.in_progress,
            self.resolved
        );
        tracing::info!(
            "with images: {} | anonymous: {} | duplicate-cluster members: {}",
            self.with_images,
            self.anonymous,
            self.duplicate_members
        );
    }
}
