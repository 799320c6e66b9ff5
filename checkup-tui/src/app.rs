//! Main application struct and event loop for checkup TUI.

use std::io;
use std::time::Duration;

use checkup_core::{AssessmentSession, Choice, SessionPhase, SignatureField};
use chrono::{
    Local,
    format::{Item, StrftimeItems},
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, layout::Rect, style::Style, widgets::Block};
use tracing::{debug, warn};

use crate::keybindings::{Action, KeyBindings};
use crate::state::{AppState, FieldEditor, FormRow, Mode};
use crate::views::{AssessmentView, HistoryView, SnapshotView, View, ViewRenderer, ViewStack};
use crate::widgets::{ConfirmationDialog, ConfirmationType, HistoryListWidget};
use crate::{CheckupTerminal, TerminalGuard, Theme, checkup_default};

/// Date format used for signature dates and history entries.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rows taken by the history view's title, borders and help line.
const HISTORY_CHROME_ROWS: u16 = 4;

/// Whether `format` is a strftime pattern chrono can render.
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    pub session: AssessmentSession,
    pub state: AppState,
    pub views: ViewStack,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub running: bool,
    /// Feedback for the last action, shown in the status bar.
    pub status_message: Option<String>,
    /// Selection state for the history view.
    pub history_widget: HistoryListWidget,
    /// Submit confirmation dialog.
    pub confirmation: ConfirmationDialog,
    /// strftime pattern for "today" and completion dates.
    pub date_format: String,
}

impl App {
    /// Creates an App driving `session` with default settings.
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            session,
            state: AppState::default(),
            views: ViewStack::new(),
            keybindings: KeyBindings::default(),
            theme: checkup_default(),
            running: true,
            status_message: None,
            history_widget: HistoryListWidget::new(),
            confirmation: ConfirmationDialog::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the date format, keeping the current one if `format` is invalid.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_date_format(&format) {
            self.date_format = format;
        } else {
            warn!(format = %format, "Ignoring invalid date format");
        }
        self
    }

    /// Focusable rows of the form in the current phase.
    pub fn rows(&self) -> Vec<FormRow> {
        FormRow::for_session(&self.session)
    }

    /// The row under the cursor, if the form has any.
    pub fn selected_row(&self) -> Option<FormRow> {
        self.rows().get(self.state.selected).copied()
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Handles a key event.
    ///
    /// Ctrl-C always quits. An open confirmation dialog and an active
    /// field edit capture keys before the keybinding table is consulted.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.confirmation.is_visible() {
            self.handle_confirmation_key(key);
            return;
        }

        if self.state.mode == Mode::Editing {
            self.handle_editing_key(key);
            return;
        }

        if let Some(action) = self.keybindings.resolve(key, &self.views.current) {
            self.execute_action(action);
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let confirmed = self.confirmation.confirmation_type();
                self.confirmation.hide();
                if let Some(confirmed) = confirmed {
                    self.confirm_submit(confirmed);
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.confirmation.hide(),
            _ => {}
        }
    }

    fn confirm_submit(&mut self, confirmed: ConfirmationType) {
        if ConfirmationType::for_phase(self.session.phase()) != Some(confirmed) {
            return;
        }
        if !self.session.submit() {
            return;
        }

        match self.session.phase() {
            SessionPhase::AwaitingSecondSignature => self.set_status("First signature submitted"),
            SessionPhase::Completed => {
                let number = self.session.history().len();
                self.set_status(format!("Assessment {number} completed"));
            }
            _ => {}
        }
        let rows = self.rows().len();
        self.state.clamp(rows);
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.state.editor.as_mut() else {
            self.state.end_edit();
            return;
        };

        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.end_edit();
                return;
            }
            KeyCode::Backspace => {
                editor.buffer.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.buffer.push(c);
            }
            _ => return,
        }

        let (slot, field, value) = (editor.slot, editor.field, editor.buffer.clone());
        if !self.session.record_signature(slot, field, &value) {
            self.state.end_edit();
        }
    }

    /// Executes an action.
    fn execute_action(&mut self, action: Action) {
        debug!(?action, view = ?self.views.current, "Executing action");
        match action {
            Action::Quit => self.running = false,
            Action::Back => {
                self.views.pop();
            }
            Action::OpenHistory => {
                if self.views.current == View::Assessment {
                    self.views.push(View::History);
                }
            }
            Action::NavigateUp => match self.views.current {
                View::Assessment => {
                    let rows = self.rows().len();
                    self.state.select_prev(rows);
                }
                View::History => {
                    let len = self.session.history().len();
                    self.history_widget.select_prev(len);
                }
                View::Snapshot(_) => {}
            },
            Action::NavigateDown => match self.views.current {
                View::Assessment => {
                    let rows = self.rows().len();
                    self.state.select_next(rows);
                }
                View::History => {
                    let len = self.session.history().len();
                    self.history_widget.select_next(len);
                }
                View::Snapshot(_) => {}
            },
            Action::Select => match self.views.current {
                View::Assessment => self.select_row(),
                View::History => {
                    if let Some(index) = self.history_widget.selected_index(self.session.history())
                    {
                        self.views.push(View::Snapshot(index));
                    }
                }
                View::Snapshot(_) => {}
            },
            Action::Start => {
                if self.session.start() {
                    self.state = AppState::default();
                    self.set_status("Assessment started");
                } else if self.session.phase().is_started() {
                    self.set_status("Assessment already in progress");
                }
            }
            Action::AnswerYes => self.answer_selected(Choice::Yes),
            Action::AnswerNo => self.answer_selected(Choice::No),
            Action::FillToday => self.fill_today(),
        }
    }

    fn select_row(&mut self) {
        match self.selected_row() {
            Some(FormRow::Signature { slot, field }) => {
                if self.session.is_signature_editable(slot) {
                    let current = self
                        .session
                        .form()
                        .signature(slot)
                        .field(field)
                        .unwrap_or("");
                    let editor = FieldEditor::new(slot, field, current);
                    self.state.begin_edit(editor);
                } else {
                    self.set_status(format!("{} is locked", slot.title()));
                }
            }
            Some(FormRow::Submit) => {
                if let Some(confirmation) = ConfirmationType::for_phase(self.session.phase()) {
                    self.confirmation.show(confirmation);
                }
            }
            Some(FormRow::Question { .. }) | None => {}
        }
    }

    fn answer_selected(&mut self, choice: Choice) {
        let Some(FormRow::Question { section, item }) = self.selected_row() else {
            return;
        };

        match self.session.set_answer(section, item, choice) {
            Ok(true) => {}
            Ok(false) => self.set_status("Assessment completed. Press [s] to start a new one"),
            Err(e) => warn!(error = %e, "Failed to record answer"),
        }
    }

    fn fill_today(&mut self) {
        let Some(FormRow::Signature {
            slot,
            field: SignatureField::Date,
        }) = self.selected_row()
        else {
            return;
        };

        let today = Local::now().format(&self.date_format).to_string();
        if !self
            .session
            .record_signature(slot, SignatureField::Date, &today)
        {
            self.set_status(format!("{} is locked", slot.title()));
        }
    }

    /// Keeps the selected history entry inside a viewport `height` rows tall.
    pub fn sync_viewport(&mut self, height: u16) {
        let visible = height.saturating_sub(HISTORY_CHROME_ROWS);
        self.history_widget.ensure_visible(usize::from(visible));
    }

    /// Renders the application to the terminal frame.
    ///
    /// Delegates to the current view's renderer, then draws the
    /// confirmation dialog on top when it is open.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);
        self.render_current_view(frame, area);
        self.confirmation.render(frame, &self.theme);
    }

    fn render_current_view(&self, frame: &mut Frame, area: Rect) {
        match self.views.current {
            View::Assessment => AssessmentView.render(frame, area, self),
            View::History => HistoryView.render(frame, area, self),
            View::Snapshot(index) => SnapshotView::new(index).render(frame, area, self),
        }
    }

    /// Runs the main event loop.
    ///
    /// The terminal is restored when the loop ends, including on error.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = TerminalGuard::enter()?;
        let result = self.event_loop(&mut terminal);
        terminal.restore()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut CheckupTerminal) -> io::Result<()> {
        while self.running {
            let size = terminal.size()?;
            self.sync_viewport(size.height);
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AssessmentSession::default())
    }
}
