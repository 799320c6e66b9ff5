//! Status bar widget for the assessment view.
//!
//! One line: the sign-off phase, answer progress, history size and the
//! most recent status message.

use checkup_core::{AssessmentSession, SessionPhase};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;

/// Widget displaying session status in a single line.
#[derive(Debug, Clone, Default)]
pub struct StatusBarWidget {
    pub phase: SessionPhase,
    pub answered: usize,
    pub total: usize,
    pub completed_count: usize,
    pub message: Option<String>,
}

impl StatusBarWidget {
    /// Captures the values to display from a session.
    pub fn from_session(session: &AssessmentSession, message: Option<&str>) -> Self {
        let progress = session.progress();
        Self {
            phase: session.phase(),
            answered: progress.answered,
            total: progress.total,
            completed_count: session.history().len(),
            message: message.map(str::to_string),
        }
    }

    /// Formats the progress as "answered/total".
    pub fn format_progress(&self) -> String {
        format!("{}/{}", self.answered, self.total)
    }

    /// Converts the widget to a renderable Paragraph with the given theme.
    ///
    /// Layout: "Phase: <phase>   Answered: N/M   History: N   <message>"
    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'_> {
        let phase_color = match self.phase {
            SessionPhase::NotStarted => theme.disabled,
            SessionPhase::AwaitingFirstSignature | SessionPhase::AwaitingSecondSignature => {
                theme.warning
            }
            SessionPhase::Completed => theme.success,
        };

        let progress_color = if self.total > 0 && self.answered == self.total {
            theme.success
        } else {
            theme.accent
        };

        let mut spans = vec![
            Span::styled("Phase: ", Style::default().fg(theme.fg)),
            Span::styled(self.phase.as_str(), Style::default().fg(phase_color)),
            Span::raw("   "),
            Span::styled("Answered: ", Style::default().fg(theme.fg)),
            Span::styled(self.format_progress(), Style::default().fg(progress_color)),
            Span::raw("   "),
            Span::styled("History: ", Style::default().fg(theme.fg)),
            Span::styled(
                self.completed_count.to_string(),
                Style::default().fg(theme.accent),
            ),
        ];

        if let Some(message) = &self.message {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(message.as_str(), theme.italic));
        }

        Paragraph::new(Line::from(spans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkup_core::{Choice, QuestionBank};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(widget: &StatusBarWidget) -> String {
        let theme = crate::checkup_default();
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(widget.to_paragraph(&theme), f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn widget_default_has_zero_values() {
        let widget = StatusBarWidget::default();
        assert_eq!(widget.phase, SessionPhase::NotStarted);
        assert_eq!(widget.format_progress(), "0/0");
        assert!(widget.message.is_none());
    }

    #[test]
    fn from_session_counts_answers() {
        let mut session = AssessmentSession::new(QuestionBank::builtin());
        session.start();
        session.set_answer(0, 0, Choice::Yes).unwrap();
        session.set_answer(1, 1, Choice::No).unwrap();

        let widget = StatusBarWidget::from_session(&session, Some("saved"));
        assert_eq!(widget.phase, SessionPhase::AwaitingFirstSignature);
        assert_eq!(widget.format_progress(), "2/5");
        assert_eq!(widget.completed_count, 0);
        assert_eq!(widget.message.as_deref(), Some("saved"));
    }

    #[test]
    fn renders_phase_progress_and_message() {
        let widget = StatusBarWidget {
            phase: SessionPhase::AwaitingSecondSignature,
            answered: 3,
            total: 5,
            completed_count: 2,
            message: Some("First signature submitted".into()),
        };
        let content = render(&widget);
        assert!(content.contains("Phase: awaiting second signature"));
        assert!(content.contains("Answered: 3/5"));
        assert!(content.contains("History: 2"));
        assert!(content.contains("First signature submitted"));
    }
}
