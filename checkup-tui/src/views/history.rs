//! History view - the list of completed assessments.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::traits::ViewRenderer;
use crate::App;

/// Lists every completed assessment, oldest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryView;

impl ViewRenderer for HistoryView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.title(), app.theme.bold))),
            chunks[0],
        );

        let list = app
            .history_widget
            .to_list(app.session.history(), &app.theme, &app.date_format);
        frame.render_widget(list, chunks[1]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[j/k] move  [Enter] open  [Esc] back  [q] quit",
                app.theme.dim,
            ))),
            chunks[2],
        );
    }

    fn title(&self) -> String {
        "Historical Assessments".to_string()
    }
}
