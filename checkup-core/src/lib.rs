//! checkup-core: Core library for checkup competency assessments
//!
//! This crate provides the state and transition rules of a checklist
//! assessment with two-stage sign-off:
//!
//! - **Catalog** - [`QuestionBank`] with the built-in checklist or one loaded from TOML
//! - **Assessment** - [`AssessmentForm`], [`Answer`] and [`Signature`] data model
//! - **Session** - [`AssessmentSession`], the sign-off state machine over [`SessionPhase`]
//! - **History** - [`HistoryLog`] of immutable [`AssessmentSnapshot`]s
//!
//! # Quick Start
//!
//! ```
//! use checkup_core::{AssessmentSession, Choice, QuestionBank, SessionPhase, SignatureSlot};
//!
//! let mut session = AssessmentSession::new(QuestionBank::builtin());
//! session.start();
//! session.set_answer(0, 0, Choice::Yes).unwrap();
//! session.sign(SignatureSlot::First, "Alice", "2024-01-01");
//! session.submit();
//! session.sign(SignatureSlot::Second, "Bob", "2024-01-01");
//! session.submit();
//!
//! assert_eq!(session.phase(), SessionPhase::Completed);
//! assert_eq!(session.history().len(), 1);
//! ```
//!
//! # Untyped input
//!
//! [`Choice`] is the only way to record an answer. Callers holding text
//! (a form field, a script, a config value) parse it with `FromStr`, which
//! accepts `yes`/`no` in any case and rejects everything else with
//! [`CheckupError::InvalidAnswer`] before the session is touched.
//!
//! ```
//! use checkup_core::{AssessmentSession, CheckupError, Choice, QuestionBank};
//!
//! let mut session = AssessmentSession::new(QuestionBank::builtin());
//! session.start();
//!
//! let choice: Choice = " YES ".parse().unwrap();
//! session.set_answer(0, 1, choice).unwrap();
//!
//! let err = "maybe".parse::<Choice>().unwrap_err();
//! assert!(matches!(err, CheckupError::InvalidAnswer(_)));
//! assert_eq!(session.progress().answered, 1);
//! ```
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted ──start──▶ AwaitingFirstSignature ──submit──▶ AwaitingSecondSignature
//!                              ▲                                     │
//!                            start                                 submit
//!                              │                                     ▼
//!                              └──────────────────────────────── Completed ──▶ HistoryLog
//! ```

pub mod assessment;
pub mod catalog;
pub mod error;
pub mod history;
pub mod session;

// Re-export key types for convenience
pub use assessment::{
    Answer, AnswerProgress, AssessmentForm, Choice, QuestionItem, QuestionSection, SessionPhase,
    Signature, SignatureField, SignatureSlot,
};
pub use catalog::{CatalogFile, CatalogSection, QuestionBank};
pub use error::{CatalogError, CheckupError};
pub use history::{AssessmentSnapshot, HistoryLog};
pub use session::{AssessmentSession, Clock, FixedClock, SystemClock};
