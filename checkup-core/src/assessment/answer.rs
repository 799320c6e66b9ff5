//! Answer values for checklist items

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CheckupError;

/// Stored answer of a checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    #[default]
    Unset,
    Yes,
    No,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// A value a caller may record for an item. There is no way to "unset" an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Yes,
    No,
}

impl From<Choice> for Answer {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Yes => Answer::Yes,
            Choice::No => Answer::No,
        }
    }
}

impl FromStr for Choice {
    type Err = CheckupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(CheckupError::InvalidAnswer(s.to_string())),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_defaults_to_unset() {
        assert_eq!(Answer::default(), Answer::Unset);
        assert!(!Answer::default().is_set());
    }

    #[test]
    fn choice_converts_to_matching_answer() {
        assert_eq!(Answer::from(Choice::Yes), Answer::Yes);
        assert_eq!(Answer::from(Choice::No), Answer::No);
    }

    #[test]
    fn choice_parses_case_insensitively() {
        assert_eq!("yes".parse::<Choice>().unwrap(), Choice::Yes);
        assert_eq!(" No ".parse::<Choice>().unwrap(), Choice::No);
    }

    #[test]
    fn choice_rejects_other_literals() {
        let err = "maybe".parse::<Choice>().unwrap_err();
        assert!(matches!(err, CheckupError::InvalidAnswer(ref v) if v == "maybe"));
        assert!("".parse::<Choice>().is_err());
        assert!("unset".parse::<Choice>().is_err());
    }

    #[test]
    fn answer_serializes_snake_case() {
        let json = serde_json::to_string(&Answer::Unset).unwrap();
        assert_eq!(json, "\"unset\"");
    }
}
