//! Snapshot view - a read-only rendering of one completed assessment.

use checkup_core::{AssessmentSnapshot, SignatureSlot};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::traits::ViewRenderer;
use crate::App;
use crate::widgets::{
    QuestionListWidget, SIGNATURE_PANEL_HEIGHT, SignaturePanel, completion_date,
};

/// Shows the answers and signatures captured in a history entry.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotView {
    index: usize,
}

impl SnapshotView {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    fn snapshot<'a>(&self, app: &'a App) -> Option<&'a AssessmentSnapshot> {
        app.session.history().get(self.index)
    }
}

impl ViewRenderer for SnapshotView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let Some(snapshot) = self.snapshot(app) else {
            frame.render_widget(
                Paragraph::new(Span::styled("Assessment not found", app.theme.dim)),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(SIGNATURE_PANEL_HEIGHT),
                Constraint::Length(SIGNATURE_PANEL_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(snapshot.title(), app.theme.bold),
                Span::raw("   "),
                Span::styled(
                    format!("Completed: {}", completion_date(snapshot, &app.date_format)),
                    Style::default().fg(app.theme.success),
                ),
            ])),
            chunks[0],
        );

        let block = Block::default()
            .title(" Questions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        frame.render_widget(
            QuestionListWidget::new(snapshot.form())
                .locked(true)
                .to_paragraph(&app.theme, 0),
            inner,
        );

        for (slot, chunk) in [
            (SignatureSlot::First, chunks[2]),
            (SignatureSlot::Second, chunks[3]),
        ] {
            let panel = SignaturePanel::new(slot, snapshot.form().signature(slot));
            frame.render_widget(panel.to_paragraph(&app.theme), chunk);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("[Esc] back  [q] quit", app.theme.dim))),
            chunks[4],
        );
    }

    fn title(&self) -> String {
        format!("Assessment {}", self.index + 1)
    }
}
