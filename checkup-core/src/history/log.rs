//! Append-only in-memory log of completed assessments

use tracing::info;

use super::types::AssessmentSnapshot;

/// Completed assessments in completion order
///
/// Entries are never removed or reordered. Timestamps are kept
/// non-decreasing: a snapshot stamped earlier than its predecessor is
/// clamped to the predecessor's time.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<AssessmentSnapshot>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot. Always succeeds.
    pub fn append(&mut self, mut snapshot: AssessmentSnapshot) {
        let floor = self.latest().map(AssessmentSnapshot::completed_at);
        snapshot.stamp(self.entries.len() + 1, floor);
        info!(
            number = snapshot.number(),
            id = %snapshot.id(),
            completed_at = %snapshot.completed_at(),
            "Assessment recorded in history"
        );
        self.entries.push(snapshot);
    }

    /// All snapshots in append order
    pub fn list(&self) -> &[AssessmentSnapshot] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&AssessmentSnapshot> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&AssessmentSnapshot> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
