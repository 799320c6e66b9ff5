//! Signature panel widget: the name/date pair of one sign-off point.

use checkup_core::{Signature, SignatureField, SignatureSlot};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::Theme;

/// Rows a panel occupies including its border.
pub const SIGNATURE_PANEL_HEIGHT: u16 = 4;

/// Renderable view of one signature slot.
#[derive(Debug, Clone, Copy)]
pub struct SignaturePanel<'a> {
    slot: SignatureSlot,
    signature: &'a Signature,
    enabled: bool,
    focused: Option<SignatureField>,
    /// Buffer being typed into the focused field.
    editing: Option<&'a str>,
}

impl<'a> SignaturePanel<'a> {
    pub fn new(slot: SignatureSlot, signature: &'a Signature) -> Self {
        Self {
            slot,
            signature,
            enabled: false,
            focused: None,
            editing: None,
        }
    }

    /// Whether the slot accepts edits in the current phase.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, field: Option<SignatureField>) -> Self {
        self.focused = field;
        self
    }

    pub fn editing(mut self, buffer: Option<&'a str>) -> Self {
        self.editing = buffer;
        self
    }

    fn field_line(&self, field: SignatureField, theme: &Theme) -> Line<'a> {
        let is_focused = self.focused == Some(field);
        let value_style = match (self.enabled, is_focused) {
            (_, true) => Style::default().bg(theme.selection).fg(theme.fg),
            (true, false) => Style::default().fg(theme.fg),
            (false, false) => Style::default().fg(theme.disabled),
        };

        let value = match (is_focused, self.editing) {
            (true, Some(buffer)) => format!("{buffer}▏"),
            _ => self.signature.field(field).unwrap_or("").to_string(),
        };

        let mut spans = vec![
            Span::styled(if is_focused { "› " } else { "  " }, value_style),
            Span::styled(
                format!("{:<6}", format!("{}:", field.label())),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, value_style),
        ];
        if is_focused && self.enabled && self.editing.is_none() && field == SignatureField::Date {
            spans.push(Span::styled("  [t] today", theme.dim));
        }
        Line::from(spans)
    }

    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'a> {
        let border = if self.enabled {
            theme.accent
        } else {
            theme.border
        };
        let title = if self.enabled {
            format!(" {} ", self.slot.title())
        } else {
            format!(" {} (locked) ", self.slot.title())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        Paragraph::new(vec![
            self.field_line(SignatureField::Name, theme),
            self.field_line(SignatureField::Date, theme),
        ])
        .block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(panel: SignaturePanel<'_>) -> String {
        let theme = crate::checkup_default();
        let backend = TestBackend::new(60, SIGNATURE_PANEL_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(panel.to_paragraph(&theme), f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn alice() -> Signature {
        Signature {
            signer_name: Some("Alice".into()),
            signed_date: Some("2024-01-01".into()),
        }
    }

    #[test]
    fn renders_title_and_recorded_fields() {
        let sig = alice();
        let content = render(SignaturePanel::new(SignatureSlot::First, &sig).enabled(true));
        assert!(content.contains("First Signature"));
        assert!(content.contains("Name: Alice"));
        assert!(content.contains("Date: 2024-01-01"));
        assert!(!content.contains("locked"));
    }

    #[test]
    fn disabled_panel_is_marked_locked() {
        let sig = alice();
        let content = render(SignaturePanel::new(SignatureSlot::Second, &sig));
        assert!(content.contains("Second Signature (locked)"));
    }

    #[test]
    fn editing_shows_buffer_instead_of_stored_value() {
        let sig = alice();
        let content = render(
            SignaturePanel::new(SignatureSlot::First, &sig)
                .enabled(true)
                .focused(Some(SignatureField::Name))
                .editing(Some("Alic")),
        );
        assert!(content.contains("Alic▏"));
    }

    #[test]
    fn focused_date_offers_today_shortcut() {
        let sig = Signature::default();
        let content = render(
            SignaturePanel::new(SignatureSlot::First, &sig)
                .enabled(true)
                .focused(Some(SignatureField::Date)),
        );
        assert!(content.contains("[t] today"));
    }
}
