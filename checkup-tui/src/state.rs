//! Presentation state for the TUI.
//!
//! Everything about the assessment itself lives in the core session;
//! this module only tracks what the cursor is on and what is being typed.

use checkup_core::{AssessmentSession, SessionPhase, SignatureField, SignatureSlot};

/// The current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Keystrokes are captured into a signature field.
    Editing,
}

/// A focusable row of the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Question { section: usize, item: usize },
    Signature { slot: SignatureSlot, field: SignatureField },
    Submit,
}

impl FormRow {
    /// Rows of the form in display order for the session's current phase.
    ///
    /// The second signature only appears once the first has been submitted.
    pub fn for_session(session: &AssessmentSession) -> Vec<FormRow> {
        let phase = session.phase();
        if !phase.is_started() {
            return Vec::new();
        }

        let mut rows: Vec<FormRow> = session
            .form()
            .items()
            .map(|(section, item, _)| FormRow::Question { section, item })
            .collect();

        let mut slots = vec![SignatureSlot::First];
        if matches!(
            phase,
            SessionPhase::AwaitingSecondSignature | SessionPhase::Completed
        ) {
            slots.push(SignatureSlot::Second);
        }
        for slot in slots {
            for field in [SignatureField::Name, SignatureField::Date] {
                rows.push(FormRow::Signature { slot, field });
            }
        }

        rows.push(FormRow::Submit);
        rows
    }
}

/// In-progress edit of one signature field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEditor {
    pub slot: SignatureSlot,
    pub field: SignatureField,
    pub buffer: String,
}

impl FieldEditor {
    pub fn new(slot: SignatureSlot, field: SignatureField, initial: &str) -> Self {
        Self {
            slot,
            field,
            buffer: initial.to_string(),
        }
    }
}

/// Cursor and editing state of the assessment view.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    /// Index into [`FormRow::for_session`].
    pub selected: usize,
    pub editor: Option<FieldEditor>,
}

impl AppState {
    /// Move the cursor down, wrapping at the end.
    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % row_count;
    }

    /// Move the cursor up, wrapping at the start.
    pub fn select_prev(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            row_count - 1
        } else {
            (self.selected - 1).min(row_count - 1)
        };
    }

    /// Keep the cursor inside the row list after the rows changed.
    pub fn clamp(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    pub fn begin_edit(&mut self, editor: FieldEditor) {
        self.editor = Some(editor);
        self.mode = Mode::Editing;
    }

    pub fn end_edit(&mut self) {
        self.editor = None;
        self.mode = Mode::Normal;
    }
}
