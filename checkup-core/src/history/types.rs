//! Core history types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::AssessmentForm;

/// Immutable, timestamped copy of a completed assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    /// Unique snapshot ID
    id: Uuid,
    /// 1-based position in the history log
    number: usize,
    /// When the second signature was submitted
    completed_at: DateTime<Utc>,
    /// Form state at completion
    form: AssessmentForm,
}

impl AssessmentSnapshot {
    /// Capture a copy of `form`. Numbering is assigned by the log on append.
    pub fn capture(form: &AssessmentForm, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: 0,
            completed_at,
            form: form.clone(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn form(&self) -> &AssessmentForm {
        &self.form
    }

    /// Display title, e.g. "Assessment 3"
    pub fn title(&self) -> String {
        format!("Assessment {}", self.number)
    }

    pub(super) fn stamp(&mut self, number: usize, floor: Option<DateTime<Utc>>) {
        self.number = number;
        if let Some(floor) = floor
            && self.completed_at < floor
        {
            self.completed_at = floor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QuestionBank;
    use chrono::TimeZone;

    #[test]
    fn capture_copies_form() {
        let mut form = QuestionBank::builtin().initialize();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let snapshot = AssessmentSnapshot::capture(&form, at);

        form.sections[0].items[0].answer = crate::assessment::Answer::Yes;

        assert_ne!(snapshot.form(), &form);
        assert_eq!(snapshot.completed_at(), at);
    }

    #[test]
    fn snapshots_get_distinct_ids() {
        let form = QuestionBank::builtin().initialize();
        let a = AssessmentSnapshot::capture(&form, Utc::now());
        let b = AssessmentSnapshot::capture(&form, Utc::now());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn stamp_clamps_timestamp_to_floor() {
        let form = QuestionBank::builtin().initialize();
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let mut snapshot = AssessmentSnapshot::capture(&form, early);

        snapshot.stamp(2, Some(late));

        assert_eq!(snapshot.number(), 2);
        assert_eq!(snapshot.title(), "Assessment 2");
        assert_eq!(snapshot.completed_at(), late);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let form = QuestionBank::builtin().initialize();
        let snapshot = AssessmentSnapshot::capture(&form, Utc::now());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["form"]["sections"].is_array());
        assert!(json["completed_at"].is_string());
    }
}
