//! In-memory history of completed assessments

mod log;
mod types;

pub use log::HistoryLog;
pub use types::AssessmentSnapshot;
