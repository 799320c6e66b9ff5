//! AssessmentSession and its sign-off state machine
//!
//! The session owns the active form, the current phase and the history log.
//! Mutators that are not valid in the current phase are ignored and report
//! `false`; only out-of-range item positions are errors.

use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use crate::assessment::{
    Answer, AnswerProgress, AssessmentForm, Choice, SessionPhase, SignatureField, SignatureSlot,
};
use crate::catalog::QuestionBank;
use crate::error::CheckupError;
use crate::history::{AssessmentSnapshot, HistoryLog};

/// A competency assessment with dual sign-off and its history
#[derive(Debug)]
pub struct AssessmentSession {
    bank: QuestionBank,
    form: AssessmentForm,
    phase: SessionPhase,
    history: HistoryLog,
    clock: Box<dyn Clock>,
}

impl AssessmentSession {
    /// Create a session over `bank` using the system clock
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_clock(bank, SystemClock)
    }

    /// Create a session with an explicit time source
    pub fn with_clock(bank: QuestionBank, clock: impl Clock + 'static) -> Self {
        let form = bank.initialize();
        Self {
            bank,
            form,
            phase: SessionPhase::NotStarted,
            history: HistoryLog::new(),
            clock: Box::new(clock),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn form(&self) -> &AssessmentForm {
        &self.form
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn progress(&self) -> AnswerProgress {
        self.form.progress()
    }

    /// Read one item's answer
    pub fn answer(&self, section: usize, item: usize) -> Result<Answer, CheckupError> {
        self.form.item(section, item).map(|i| i.answer)
    }

    /// Begin an assessment.
    ///
    /// From `NotStarted` the current form is used; from `Completed` a fresh
    /// form replaces the completed one. Ignored while signatures are pending.
    pub fn start(&mut self) -> bool {
        match self.phase {
            SessionPhase::NotStarted => {}
            SessionPhase::Completed => {
                self.form = self.bank.initialize();
            }
            phase => {
                debug!(phase = phase.as_str(), "Ignoring start: assessment in progress");
                return false;
            }
        }

        self.phase = SessionPhase::AwaitingFirstSignature;
        info!("Assessment started");
        true
    }

    /// Record a yes/no answer.
    ///
    /// Fails for positions outside the form. Ignored once completed.
    pub fn set_answer(
        &mut self,
        section: usize,
        item: usize,
        choice: Choice,
    ) -> Result<bool, CheckupError> {
        let target = self.form.item_mut(section, item)?;

        if self.phase == SessionPhase::Completed {
            debug!(section, item, "Ignoring answer: assessment completed");
            return Ok(false);
        }

        target.answer = choice.into();
        debug!(section, item, answer = %target.answer, "Answer recorded");
        Ok(true)
    }

    /// Update one field of a signature, keeping the other field's value.
    ///
    /// The first signature is editable only while awaiting it, likewise the
    /// second. Never changes the phase.
    pub fn record_signature(
        &mut self,
        slot: SignatureSlot,
        field: SignatureField,
        value: &str,
    ) -> bool {
        if !self.is_signature_editable(slot) {
            debug!(
                ?slot,
                ?field,
                phase = self.phase.as_str(),
                "Ignoring signature edit"
            );
            return false;
        }

        self.form.signature_mut(slot).set_field(field, value);
        true
    }

    /// Record both fields of a signature
    pub fn sign(&mut self, slot: SignatureSlot, name: &str, date: &str) -> bool {
        self.record_signature(slot, SignatureField::Name, name)
            && self.record_signature(slot, SignatureField::Date, date)
    }

    /// Whether `slot` currently accepts edits
    pub fn is_signature_editable(&self, slot: SignatureSlot) -> bool {
        matches!(
            (slot, self.phase),
            (SignatureSlot::First, SessionPhase::AwaitingFirstSignature)
                | (SignatureSlot::Second, SessionPhase::AwaitingSecondSignature)
        )
    }

    /// Advance the sign-off.
    ///
    /// Completing the second signature appends exactly one snapshot to the
    /// history, stamped with the session clock.
    pub fn submit(&mut self) -> bool {
        let Some(next) = self.phase.after_submit() else {
            debug!(phase = self.phase.as_str(), "Ignoring submit");
            return false;
        };

        self.phase = next;
        if next == SessionPhase::Completed {
            let snapshot = AssessmentSnapshot::capture(&self.form, self.clock.now());
            self.history.append(snapshot);
        } else {
            info!(phase = next.as_str(), "First signature submitted");
        }
        true
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new(QuestionBank::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FixedClock;
    use chrono::{TimeZone, Utc};

    fn session() -> AssessmentSession {
        AssessmentSession::default()
    }

    fn completed() -> AssessmentSession {
        let mut s = session();
        s.start();
        s.submit();
        s.submit();
        s
    }

    #[test]
    fn new_session_is_not_started_with_empty_history() {
        let s = session();
        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert!(s.history().is_empty());
        assert_eq!(s.progress().answered, 0);
    }

    #[test]
    fn start_is_ignored_while_in_progress() {
        let mut s = session();
        assert!(s.start());
        s.set_answer(0, 0, Choice::Yes).unwrap();
        assert!(!s.start());
        assert_eq!(s.phase(), SessionPhase::AwaitingFirstSignature);
        assert_eq!(s.answer(0, 0).unwrap(), Answer::Yes);

        s.submit();
        assert!(!s.start());
        assert_eq!(s.phase(), SessionPhase::AwaitingSecondSignature);
    }

    #[test]
    fn set_answer_updates_only_target() {
        let mut s = session();
        s.start();
        assert!(s.set_answer(1, 1, Choice::No).unwrap());

        assert_eq!(s.answer(1, 1).unwrap(), Answer::No);
        let others = s
            .form()
            .items()
            .filter(|(sec, item, _)| (*sec, *item) != (1, 1))
            .all(|(_, _, i)| i.answer == Answer::Unset);
        assert!(others);
    }

    #[test]
    fn set_answer_twice_is_idempotent() {
        let mut s = session();
        s.start();
        s.set_answer(0, 2, Choice::Yes).unwrap();
        let once = s.form().clone();
        s.set_answer(0, 2, Choice::Yes).unwrap();
        assert_eq!(s.form(), &once);
    }

    #[test]
    fn set_answer_out_of_range_fails_without_change() {
        let mut s = session();
        s.start();
        let before = s.form().clone();

        let err = s.set_answer(0, 3, Choice::Yes).unwrap_err();
        assert!(matches!(
            err,
            CheckupError::IndexOutOfRange {
                section: 0,
                item: 3
            }
        ));
        assert!(s.set_answer(9, 0, Choice::No).is_err());
        assert_eq!(s.form(), &before);
    }

    #[test]
    fn set_answer_out_of_range_fails_even_when_completed() {
        let mut s = completed();
        assert!(s.set_answer(5, 0, Choice::Yes).is_err());
    }

    #[test]
    fn set_answer_is_ignored_after_completion() {
        let mut s = completed();
        assert!(!s.set_answer(0, 0, Choice::Yes).unwrap());
        assert_eq!(s.answer(0, 0).unwrap(), Answer::Unset);
    }

    #[test]
    fn first_signature_merges_fields() {
        let mut s = session();
        s.start();
        assert!(s.record_signature(SignatureSlot::First, SignatureField::Name, "Alice"));
        assert!(s.record_signature(SignatureSlot::First, SignatureField::Date, "2024-01-01"));

        let sig = &s.form().first_signature;
        assert_eq!(sig.signer_name.as_deref(), Some("Alice"));
        assert_eq!(sig.signed_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn first_signature_is_ignored_before_start() {
        let mut s = session();
        assert!(!s.record_signature(SignatureSlot::First, SignatureField::Name, "Alice"));
        assert!(s.form().first_signature.is_unset());
    }

    #[test]
    fn first_signature_is_frozen_after_submit() {
        let mut s = session();
        s.start();
        s.sign(SignatureSlot::First, "Alice", "2024-01-01");
        s.submit();

        assert!(!s.record_signature(SignatureSlot::First, SignatureField::Name, "Mallory"));
        assert_eq!(
            s.form().first_signature.signer_name.as_deref(),
            Some("Alice")
        );
    }

    #[test]
    fn second_signature_only_editable_while_awaiting_it() {
        let mut s = session();
        s.start();
        assert!(!s.record_signature(SignatureSlot::Second, SignatureField::Name, "Bob"));
        assert!(s.form().second_signature.is_unset());

        s.submit();
        assert!(s.record_signature(SignatureSlot::Second, SignatureField::Name, "Bob"));
        assert_eq!(s.phase(), SessionPhase::AwaitingSecondSignature);
        assert!(s.history().is_empty());
    }

    #[test]
    fn editing_second_signature_never_appends_history() {
        let mut s = session();
        s.start();
        s.submit();
        for prefix in ["B", "Bo", "Bob"] {
            s.record_signature(SignatureSlot::Second, SignatureField::Name, prefix);
        }
        s.record_signature(SignatureSlot::Second, SignatureField::Date, "2024-02-02");

        assert!(s.history().is_empty());
        assert_eq!(s.phase(), SessionPhase::AwaitingSecondSignature);
    }

    #[test]
    fn submit_from_not_started_is_ignored() {
        let mut s = session();
        assert!(!s.submit());
        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert!(s.history().is_empty());
    }

    #[test]
    fn submit_after_completion_is_ignored() {
        let mut s = completed();
        assert!(!s.submit());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn second_submit_appends_snapshot_of_current_form() {
        let at = Utc.with_ymd_and_hms(2024, 5, 6, 14, 30, 0).unwrap();
        let mut s = AssessmentSession::with_clock(QuestionBank::builtin(), FixedClock(at));
        s.start();
        s.set_answer(0, 0, Choice::Yes).unwrap();
        s.sign(SignatureSlot::First, "Alice", "2024-05-06");
        s.submit();
        s.sign(SignatureSlot::Second, "Bob", "2024-05-06");
        assert!(s.submit());

        assert_eq!(s.phase(), SessionPhase::Completed);
        let snapshot = s.history().latest().unwrap();
        assert_eq!(snapshot.form(), s.form());
        assert_eq!(snapshot.completed_at(), at);
        assert_eq!(snapshot.number(), 1);
    }

    #[test]
    fn start_after_completion_begins_fresh_form() {
        let mut s = session();
        s.start();
        s.set_answer(0, 0, Choice::No).unwrap();
        s.sign(SignatureSlot::First, "Alice", "2024-01-01");
        s.submit();
        s.submit();

        assert!(s.start());
        assert_eq!(s.phase(), SessionPhase::AwaitingFirstSignature);
        assert_eq!(s.answer(0, 0).unwrap(), Answer::Unset);
        assert!(s.form().first_signature.is_unset());
        assert_eq!(s.history().len(), 1);
        assert_eq!(
            s.history().list()[0].form().sections[0].items[0].answer,
            Answer::No
        );
    }
}
