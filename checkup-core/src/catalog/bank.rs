//! Fixed, ordered catalog of checklist questions

use std::path::Path;

use tracing::debug;

use super::types::{CatalogFile, CatalogSection};
use crate::assessment::{AssessmentForm, QuestionItem, QuestionSection};
use crate::error::CatalogError;

/// Read-only source of the sections and questions a form is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    sections: Vec<QuestionSection>,
}

impl QuestionBank {
    /// The medication-handling competency checklist
    pub fn builtin() -> Self {
        Self {
            sections: vec![
                section(
                    "Training and Policy",
                    None,
                    &[
                        "Has the member of staff completed training on the safe handling of medicines?",
                        "Has the member of staff read the medication policy and signed to indicate that they have done so?",
                        "Does the member of staff know how to access the medication policy if they wish to check any information?",
                    ],
                ),
                section(
                    "Administration of Medicines",
                    Some("Preparation and hygiene"),
                    &[
                        "Did the member of staff wash their hands before starting to administer any medication and follow appropriate hygiene measures throughout the medication round? E.g. wear gloves when applying creams.",
                        "Did the member of staff make sure that everything was properly prepared before starting the medication round, e.g. was there plenty of medication cups, jug of water, beakers etc.",
                    ],
                ),
            ],
        }
    }

    /// Parse a catalog from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::from_file(file)
    }

    /// Load a catalog from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!(path = %path.display(), "Loading question catalog");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        if file.sections.is_empty() {
            return Err(CatalogError::Empty);
        }

        let sections = file
            .sections
            .into_iter()
            .map(validate_section)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { sections })
    }

    /// Build a new form with every answer and both signatures unset
    pub fn initialize(&self) -> AssessmentForm {
        AssessmentForm::new(self.sections.clone())
    }

    pub fn sections(&self) -> &[QuestionSection] {
        &self.sections
    }

    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Convert back to the on-disk format
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            sections: self
                .sections
                .iter()
                .map(|s| CatalogSection {
                    title: s.title.clone(),
                    subsection: s.subsection.clone(),
                    questions: s.items.iter().map(|i| i.question.clone()).collect(),
                })
                .collect(),
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn section(title: &str, subsection: Option<&str>, questions: &[&str]) -> QuestionSection {
    QuestionSection {
        title: title.to_string(),
        subsection: subsection.map(str::to_string),
        items: questions.iter().copied().map(QuestionItem::new).collect(),
    }
}

fn validate_section(raw: CatalogSection) -> Result<QuestionSection, CatalogError> {
    if raw.title.trim().is_empty() {
        return Err(CatalogError::Blank("section title"));
    }
    if raw.questions.is_empty() {
        return Err(CatalogError::EmptySection(raw.title));
    }
    if raw.questions.iter().any(|q| q.trim().is_empty()) {
        return Err(CatalogError::Blank("question"));
    }

    Ok(QuestionSection {
        title: raw.title,
        subsection: raw.subsection.filter(|s| !s.trim().is_empty()),
        items: raw.questions.into_iter().map(QuestionItem::new).collect(),
    })
}
