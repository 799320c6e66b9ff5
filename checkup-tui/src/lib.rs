//! Terminal UI for checkup.
//!
//! Renders an [`checkup_core::AssessmentSession`] as a keyboard-driven
//! form built on ratatui and crossterm: questions with Yes/No radios,
//! the two signature panels, a submit control and the history of
//! completed assessments.

mod app;
mod keybindings;
mod state;
mod terminal;
mod theme;
mod views;
mod widgets;

pub use app::{App, DEFAULT_DATE_FORMAT, is_valid_date_format};
pub use keybindings::{Action, KeyBindings};
pub use state::{AppState, FieldEditor, FormRow, Mode};
pub use terminal::{CheckupTerminal, TerminalGuard, install_panic_hook};
pub use theme::{THEME_NAMES, Theme, checkup_default, high_contrast, theme_by_name};
pub use views::{AssessmentView, HistoryView, SnapshotView, View, ViewRenderer, ViewStack};
pub use widgets::{
    ConfirmationDialog, ConfirmationType, HistoryListWidget, QuestionListWidget, SignaturePanel,
    StatusBarWidget,
};
