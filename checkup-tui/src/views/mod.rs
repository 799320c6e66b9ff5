//! View system for checkup TUI.
//!
//! This module provides:
//! - `View` enum for all available views
//! - `ViewStack` for stack-based navigation
//! - `ViewRenderer` trait for view rendering
//! - The assessment, history and snapshot views

mod assessment;
mod history;
mod snapshot;
mod stack;
mod traits;

pub use assessment::AssessmentView;
pub use history::HistoryView;
pub use snapshot::SnapshotView;
pub use stack::{View, ViewStack};
pub use traits::ViewRenderer;
