//! Assessment view - the competency form and its sign-off controls.

use checkup_core::{SessionPhase, SignatureSlot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::traits::ViewRenderer;
use crate::App;
use crate::state::{FormRow, Mode};
use crate::widgets::{
    QuestionListWidget, SIGNATURE_PANEL_HEIGHT, SignaturePanel, StatusBarWidget,
};

/// The form: questions, signature panels and the submit control.
#[derive(Debug, Clone, Default)]
pub struct AssessmentView;

impl AssessmentView {
    fn render_start_prompt(&self, frame: &mut Frame, area: Rect, app: &App) {
        let mut lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(app.theme.fg)),
                Span::styled("[s]", Style::default().fg(app.theme.accent)),
                Span::styled(" to start the assessment", Style::default().fg(app.theme.fg)),
            ]),
        ];
        if !app.session.history().is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Press ", Style::default().fg(app.theme.fg)),
                Span::styled("[h]", Style::default().fg(app.theme.accent)),
                Span::styled(
                    " for historical assessments",
                    Style::default().fg(app.theme.fg),
                ),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }

    fn render_questions(&self, frame: &mut Frame, area: Rect, app: &App, row: Option<FormRow>) {
        let selected = match row {
            Some(FormRow::Question { section, item }) => Some((section, item)),
            _ => None,
        };
        let locked = app.session.phase() == SessionPhase::Completed;
        let widget = QuestionListWidget::new(app.session.form())
            .with_selected(selected)
            .locked(locked);

        let block = Block::default()
            .title(" Questions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));
        let inner = block.inner(area);

        let scroll = selected
            .map(|(section, item)| {
                widget
                    .row_offset(section, item, inner.width, &app.theme)
                    .saturating_sub(inner.height / 2)
            })
            .unwrap_or(0);

        frame.render_widget(block, area);
        frame.render_widget(widget.to_paragraph(&app.theme, scroll), inner);
    }

    fn render_signature(
        &self,
        frame: &mut Frame,
        area: Rect,
        app: &App,
        slot: SignatureSlot,
        row: Option<FormRow>,
    ) {
        let focused = match row {
            Some(FormRow::Signature { slot: s, field }) if s == slot => Some(field),
            _ => None,
        };
        let editing = app
            .state
            .editor
            .as_ref()
            .filter(|e| e.slot == slot)
            .map(|e| e.buffer.as_str());

        let panel = SignaturePanel::new(slot, app.session.form().signature(slot))
            .enabled(app.session.is_signature_editable(slot))
            .focused(focused)
            .editing(editing);
        frame.render_widget(panel.to_paragraph(&app.theme), area);
    }

    fn submit_line<'a>(&self, app: &'a App, row: Option<FormRow>) -> Line<'a> {
        let phase = app.session.phase();
        if !phase.can_submit() {
            return Line::from(vec![
                Span::styled("Assessment completed. Press ", app.theme.dim),
                Span::styled("[s]", Style::default().fg(app.theme.accent)),
                Span::styled(" to start a new one.", app.theme.dim),
            ]);
        }

        let style = if row == Some(FormRow::Submit) {
            Style::default()
                .bg(app.theme.selection)
                .fg(app.theme.fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.accent)
        };
        Line::from(Span::styled(format!("[ {} ]", phase.submit_label()), style))
    }

    fn help_line<'a>(&self, app: &'a App) -> Line<'a> {
        let text = match app.state.mode {
            Mode::Editing => "Type to edit  [Enter/Esc] done",
            Mode::Normal => {
                "[j/k] move  [y/n] answer  [Enter] edit/submit  [h] history  [q] quit"
            }
        };
        Line::from(Span::styled(text, app.theme.dim))
    }
}

impl ViewRenderer for AssessmentView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.title(), app.theme.bold))),
            chunks[0],
        );
        let status = StatusBarWidget::from_session(&app.session, app.status_message.as_deref());
        frame.render_widget(status.to_paragraph(&app.theme), chunks[1]);

        let phase = app.session.phase();
        if !phase.is_started() {
            self.render_start_prompt(frame, chunks[2], app);
            return;
        }

        let show_second = matches!(
            phase,
            SessionPhase::AwaitingSecondSignature | SessionPhase::Completed
        );
        let body = Layout::default()
            .constraints([
                Constraint::Min(3),
                Constraint::Length(SIGNATURE_PANEL_HEIGHT),
                Constraint::Length(if show_second {
                    SIGNATURE_PANEL_HEIGHT
                } else {
                    0
                }),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(chunks[2]);

        let row = app.selected_row();
        self.render_questions(frame, body[0], app, row);
        self.render_signature(frame, body[1], app, SignatureSlot::First, row);
        if show_second {
            self.render_signature(frame, body[2], app, SignatureSlot::Second, row);
        }
        frame.render_widget(Paragraph::new(self.submit_line(app, row)), body[3]);
        frame.render_widget(Paragraph::new(self.help_line(app)), body[4]);
    }

    fn title(&self) -> String {
        "Competency Assessment".to_string()
    }
}
