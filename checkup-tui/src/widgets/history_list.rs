//! Historical assessments list widget.
//!
//! Displays one row per completed assessment ("Assessment N" and its
//! completion date) with keyboard selection and scrolling.

use checkup_core::{AssessmentSnapshot, HistoryLog};
use chrono::Local;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::Theme;

/// Selection and scroll state for the history list.
///
/// The entries themselves are read from the session's [`HistoryLog`] at
/// render time, so the list always reflects the live log length.
#[derive(Debug, Clone, Default)]
pub struct HistoryListWidget {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl HistoryListWidget {
    /// Creates a new history list with the first entry selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves selection to the next entry, wrapping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Moves selection to the previous entry, wrapping at the start.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = len - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Updates the scroll offset so the selected entry is visible.
    pub fn ensure_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
    }

    /// Index of the selected entry, if the log has one there.
    pub fn selected_index(&self, history: &HistoryLog) -> Option<usize> {
        history.get(self.selected).map(|_| self.selected)
    }

    /// Converts the widget to a renderable List with the given theme.
    pub fn to_list<'a>(
        &self,
        history: &'a HistoryLog,
        theme: &Theme,
        date_format: &str,
    ) -> List<'a> {
        let items: Vec<ListItem> = if history.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No completed assessments",
                Style::default().fg(theme.fg).add_modifier(Modifier::DIM),
            )))]
        } else {
            history
                .list()
                .iter()
                .enumerate()
                .skip(self.scroll_offset)
                .map(|(i, snapshot)| {
                    snapshot_to_item(snapshot, i == self.selected, theme, date_format)
                })
                .collect()
        };

        let block = Block::default()
            .title(" Historical Assessments ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        List::new(items).block(block)
    }
}

/// Formats a snapshot's completion time as a local date.
pub fn completion_date(snapshot: &AssessmentSnapshot, date_format: &str) -> String {
    snapshot
        .completed_at()
        .with_timezone(&Local)
        .format(date_format)
        .to_string()
}

fn snapshot_to_item(
    snapshot: &AssessmentSnapshot,
    selected: bool,
    theme: &Theme,
    date_format: &str,
) -> ListItem<'static> {
    let bullet = if selected { "●" } else { " " };
    let style = if selected {
        Style::default().bg(theme.selection).fg(theme.fg)
    } else {
        Style::default().fg(theme.fg)
    };

    let signer = snapshot
        .form()
        .second_signature
        .signer_name
        .clone()
        .unwrap_or_else(|| "-".to_string());

    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", bullet), Style::default().fg(theme.accent)),
        Span::styled(format!("{:<16}", snapshot.title()), style),
        Span::styled(
            format!("Date: {}  ", completion_date(snapshot, date_format)),
            style,
        ),
        Span::styled(format!("signed off by {}", signer), theme.dim),
    ]))
}
