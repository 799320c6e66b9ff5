//! Widgets for the checkup TUI.
//!
//! This module contains reusable widget components for rendering
//! the assessment form, its signatures and the history list.

mod confirmation;
mod history_list;
mod question_list;
mod signature_panel;
mod status_bar;

pub use confirmation::{ConfirmationDialog, ConfirmationType};
pub use history_list::{HistoryListWidget, completion_date};
pub use question_list::QuestionListWidget;
pub use signature_panel::{SIGNATURE_PANEL_HEIGHT, SignaturePanel};
pub use status_bar::StatusBarWidget;
