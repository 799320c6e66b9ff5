//! Assessment form: questions, answers and signatures

use serde::{Deserialize, Serialize};

use super::answer::Answer;
use crate::error::CheckupError;

/// One yes/no checklist question with its answer slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub question: String,
    #[serde(default)]
    pub answer: Answer,
}

impl QuestionItem {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Answer::Unset,
        }
    }
}

/// Named group of checklist items, optionally labelled with a subsection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSection {
    pub title: String,
    pub subsection: Option<String>,
    pub items: Vec<QuestionItem>,
}

/// Which sign-off point a signature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureSlot {
    First,
    Second,
}

impl SignatureSlot {
    pub fn title(&self) -> &'static str {
        match self {
            Self::First => "First Signature",
            Self::Second => "Second Signature",
        }
    }
}

/// Which half of a signature is being recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureField {
    Name,
    Date,
}

impl SignatureField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Date => "Date",
        }
    }
}

/// Name/date pair recorded at a sign-off point
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signature {
    pub signer_name: Option<String>,
    pub signed_date: Option<String>,
}

impl Signature {
    /// True when neither field has been recorded
    pub fn is_unset(&self) -> bool {
        self.signer_name.is_none() && self.signed_date.is_none()
    }

    pub fn field(&self, field: SignatureField) -> Option<&str> {
        match field {
            SignatureField::Name => self.signer_name.as_deref(),
            SignatureField::Date => self.signed_date.as_deref(),
        }
    }

    /// Overwrite one field, leaving the other untouched. Empty input clears it.
    pub(crate) fn set_field(&mut self, field: SignatureField, value: &str) {
        let value = (!value.is_empty()).then(|| value.to_string());
        match field {
            SignatureField::Name => self.signer_name = value,
            SignatureField::Date => self.signed_date = value,
        }
    }
}

/// Answer counts for progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
}

impl AnswerProgress {
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// The single active checklist of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentForm {
    pub sections: Vec<QuestionSection>,
    pub first_signature: Signature,
    pub second_signature: Signature,
}

impl AssessmentForm {
    /// Create a form over the given sections with both signatures unset
    pub fn new(sections: Vec<QuestionSection>) -> Self {
        Self {
            sections,
            first_signature: Signature::default(),
            second_signature: Signature::default(),
        }
    }

    /// Look up an item by position
    pub fn item(&self, section: usize, item: usize) -> Result<&QuestionItem, CheckupError> {
        self.sections
            .get(section)
            .and_then(|s| s.items.get(item))
            .ok_or(CheckupError::IndexOutOfRange { section, item })
    }

    pub(crate) fn item_mut(
        &mut self,
        section: usize,
        item: usize,
    ) -> Result<&mut QuestionItem, CheckupError> {
        self.sections
            .get_mut(section)
            .and_then(|s| s.items.get_mut(item))
            .ok_or(CheckupError::IndexOutOfRange { section, item })
    }

    pub fn signature(&self, slot: SignatureSlot) -> &Signature {
        match slot {
            SignatureSlot::First => &self.first_signature,
            SignatureSlot::Second => &self.second_signature,
        }
    }

    pub(crate) fn signature_mut(&mut self, slot: SignatureSlot) -> &mut Signature {
        match slot {
            SignatureSlot::First => &mut self.first_signature,
            SignatureSlot::Second => &mut self.second_signature,
        }
    }

    /// Iterate all items in display order with their (section, item) position
    pub fn items(&self) -> impl Iterator<Item = (usize, usize, &QuestionItem)> {
        self.sections.iter().enumerate().flat_map(|(s, section)| {
            section
                .items
                .iter()
                .enumerate()
                .map(move |(i, item)| (s, i, item))
        })
    }

    pub fn progress(&self) -> AnswerProgress {
        let (total, answered) = self
            .items()
            .fold((0, 0), |(total, answered), (_, _, item)| {
                (total + 1, answered + usize::from(item.answer.is_set()))
            });
        AnswerProgress {
            total,
            answered,
            remaining: total - answered,
        }
    }
}
