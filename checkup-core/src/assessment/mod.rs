//! Assessment form data model and sign-off phases

mod answer;
mod form;
mod phase;

pub use answer::{Answer, Choice};
pub use form::{
    AnswerProgress, AssessmentForm, QuestionItem, QuestionSection, Signature, SignatureField,
    SignatureSlot,
};
pub use phase::SessionPhase;
