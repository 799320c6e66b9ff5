//! Assessment session: the single owner of form, phase and history

mod clock;
mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use state::AssessmentSession;
