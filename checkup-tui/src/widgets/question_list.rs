//! Checklist questions widget.
//!
//! Renders every section heading, optional subsection and question with
//! its Yes/No radio pair. Shared by the live form and the read-only
//! snapshot view.

use checkup_core::{Answer, AssessmentForm};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::Theme;

/// Renderable view of a form's questions.
#[derive(Debug, Clone, Copy)]
pub struct QuestionListWidget<'a> {
    form: &'a AssessmentForm,
    selected: Option<(usize, usize)>,
    locked: bool,
}

impl<'a> QuestionListWidget<'a> {
    pub fn new(form: &'a AssessmentForm) -> Self {
        Self {
            form,
            selected: None,
            locked: false,
        }
    }

    /// Highlight the question at (section, item).
    pub fn with_selected(mut self, selected: Option<(usize, usize)>) -> Self {
        self.selected = selected;
        self
    }

    /// Render answers without the selection cursor, as in a completed form.
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// All lines in display order.
    pub fn lines(&self, theme: &Theme) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        for (s, section) in self.form.sections.iter().enumerate() {
            if s > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                section.title.as_str(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(subsection) = &section.subsection {
                lines.push(Line::from(Span::styled(subsection.as_str(), theme.italic)));
            }

            for (i, item) in section.items.iter().enumerate() {
                let selected = !self.locked && self.selected == Some((s, i));
                lines.push(self.item_line(&item.question, item.answer, selected, theme));
            }
        }

        lines
    }

    /// Estimated row offset of the question at (section, item) when the
    /// lines are wrapped to `width` columns.
    pub fn row_offset(&self, section: usize, item: usize, width: u16, theme: &Theme) -> u16 {
        let width = usize::from(width.max(1));
        let mut row = 0usize;
        let mut line_index = 0usize;
        let target = self.line_index(section, item);

        for line in self.lines(theme) {
            if line_index == target {
                break;
            }
            row += line.width().div_ceil(width).max(1);
            line_index += 1;
        }

        u16::try_from(row).unwrap_or(u16::MAX)
    }

    /// Index into [`Self::lines`] of the question at (section, item).
    fn line_index(&self, section: usize, item: usize) -> usize {
        let mut index = 0;
        for (s, sec) in self.form.sections.iter().enumerate() {
            if s > 0 {
                index += 1;
            }
            index += 1 + usize::from(sec.subsection.is_some());
            if s == section {
                return index + item;
            }
            index += sec.items.len();
        }
        index
    }

    /// Converts the widget to a wrapped Paragraph scrolled by `scroll` rows.
    pub fn to_paragraph(&self, theme: &Theme, scroll: u16) -> Paragraph<'a> {
        Paragraph::new(self.lines(theme))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
    }

    fn item_line(
        &self,
        question: &'a str,
        answer: Answer,
        selected: bool,
        theme: &Theme,
    ) -> Line<'a> {
        let radio = |label: &'static str, on: bool, color: Color| {
            let (mark, style) = if on {
                ("(•) ", Style::default().fg(color).add_modifier(Modifier::BOLD))
            } else {
                ("( ) ", Style::default().fg(theme.unset))
            };
            Span::styled(format!("{mark}{label}"), style)
        };

        let text_style = if selected {
            Style::default().bg(theme.selection).fg(theme.fg)
        } else {
            Style::default().fg(theme.fg)
        };

        Line::from(vec![
            Span::styled(if selected { "› " } else { "  " }, text_style),
            radio("Yes ", answer == Answer::Yes, theme.yes),
            radio("No  ", answer == Answer::No, theme.no),
            Span::styled(question, text_style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkup_core::{AssessmentSession, Choice, QuestionBank};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(widget: QuestionListWidget<'_>, width: u16, height: u16) -> String {
        let theme = crate::checkup_default();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(widget.to_paragraph(&theme, 0), f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn lines_include_headings_and_every_question() {
        let form = QuestionBank::builtin().initialize();
        let theme = crate::checkup_default();
        let lines = QuestionListWidget::new(&form).lines(&theme);

        // 2 titles + 1 subsection + 1 spacer + 5 questions
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn line_index_accounts_for_headings() {
        let form = QuestionBank::builtin().initialize();
        let widget = QuestionListWidget::new(&form);
        assert_eq!(widget.line_index(0, 0), 1);
        assert_eq!(widget.line_index(0, 2), 3);
        // spacer, title, subsection
        assert_eq!(widget.line_index(1, 0), 7);
    }

    #[test]
    fn row_offset_grows_with_narrow_width() {
        let form = QuestionBank::builtin().initialize();
        let theme = crate::checkup_default();
        let widget = QuestionListWidget::new(&form);
        let wide = widget.row_offset(1, 1, 500, &theme);
        let narrow = widget.row_offset(1, 1, 40, &theme);
        assert_eq!(wide, 8);
        assert!(narrow > wide);
    }

    #[test]
    fn renders_section_titles_and_radios() {
        let form = QuestionBank::builtin().initialize();
        let content = render(QuestionListWidget::new(&form), 120, 20);
        assert!(content.contains("Training and Policy"));
        assert!(content.contains("Preparation and hygiene"));
        assert!(content.contains("( ) Yes"));
        assert!(!content.contains("(•)"));
    }

    #[test]
    fn renders_recorded_answer_as_selected_radio() {
        let mut session = AssessmentSession::new(QuestionBank::builtin());
        session.start();
        session.set_answer(0, 0, Choice::No).unwrap();
        let content = render(QuestionListWidget::new(session.form()), 200, 20);
        assert!(content.contains("(•) No"));
    }

    #[test]
    fn selection_cursor_hidden_when_locked() {
        let form = QuestionBank::builtin().initialize();
        let selected = render(
            QuestionListWidget::new(&form).with_selected(Some((0, 0))),
            200,
            20,
        );
        let locked = render(
            QuestionListWidget::new(&form)
                .with_selected(Some((0, 0)))
                .locked(true),
            200,
            20,
        );
        assert!(selected.contains('›'));
        assert!(!locked.contains('›'));
    }
}
