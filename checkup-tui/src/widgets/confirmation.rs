//! Confirmation dialog shown before each sign-off submit.
//!
//! Submitting freezes the signature just entered, and completing freezes
//! the whole form, so both ask for a y/n confirmation first.

use checkup_core::SessionPhase;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::Theme;

/// Which submit is being confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationType {
    /// Submit the first signature and hand over to the second signer.
    SubmitFirst,
    /// Submit the second signature and complete the assessment.
    Complete,
}

impl ConfirmationType {
    /// The confirmation needed to submit from `phase`, if submitting is possible.
    pub fn for_phase(phase: SessionPhase) -> Option<Self> {
        match phase {
            SessionPhase::AwaitingFirstSignature => Some(Self::SubmitFirst),
            SessionPhase::AwaitingSecondSignature => Some(Self::Complete),
            SessionPhase::NotStarted | SessionPhase::Completed => None,
        }
    }

    /// Returns the dialog title for this confirmation type.
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmationType::SubmitFirst => "Submit First Signature",
            ConfirmationType::Complete => "Complete Assessment",
        }
    }

    /// Returns the dialog message for this confirmation type.
    pub fn message(&self) -> &'static str {
        match self {
            ConfirmationType::SubmitFirst => {
                "Submit first signature? It can no longer be edited."
            }
            ConfirmationType::Complete => {
                "Complete assessment? The form becomes read-only."
            }
        }
    }
}

/// Modal dialog for confirming a submit.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationDialog {
    confirmation_type: Option<ConfirmationType>,
}

impl ConfirmationDialog {
    /// Creates a new, hidden confirmation dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the dialog for the given confirmation type.
    pub fn show(&mut self, confirmation_type: ConfirmationType) {
        self.confirmation_type = Some(confirmation_type);
    }

    /// Hides the dialog.
    pub fn hide(&mut self) {
        self.confirmation_type = None;
    }

    /// Returns true if the dialog is visible.
    pub fn is_visible(&self) -> bool {
        self.confirmation_type.is_some()
    }

    /// Returns the current confirmation type, if visible.
    pub fn confirmation_type(&self) -> Option<ConfirmationType> {
        self.confirmation_type
    }

    /// Renders the dialog centered on the screen.
    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let Some(confirmation_type) = self.confirmation_type else {
            return;
        };

        let area = frame.area();
        let dialog_width = 56u16.min(area.width.saturating_sub(4));
        let dialog_height = 6u16.min(area.height);
        let x = (area.width.saturating_sub(dialog_width)) / 2;
        let y = (area.height.saturating_sub(dialog_height)) / 2;
        let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let border = match confirmation_type {
            ConfirmationType::SubmitFirst => theme.warning,
            ConfirmationType::Complete => theme.error,
        };
        let title = format!(" {} ", confirmation_type.title());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let lines = vec![
            Line::from(Span::styled(
                confirmation_type.message(),
                Style::default().fg(theme.fg),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(theme.accent)),
                Span::styled(" Yes  ", Style::default().fg(theme.fg)),
                Span::styled("[n]", Style::default().fg(theme.accent)),
                Span::styled(" No", Style::default().fg(theme.fg)),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
