//! Sign-off lifecycle of an assessment

use serde::{Deserialize, Serialize};

/// Position of an assessment within its two-stage sign-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    NotStarted,
    AwaitingFirstSignature,
    AwaitingSecondSignature,
    Completed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::AwaitingFirstSignature => "awaiting first signature",
            Self::AwaitingSecondSignature => "awaiting second signature",
            Self::Completed => "completed",
        }
    }

    /// True once the assessment has been started (questions are visible)
    pub fn is_started(&self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    /// True while the submit control is enabled
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            Self::AwaitingFirstSignature | Self::AwaitingSecondSignature
        )
    }

    /// Label of the submit control for this phase
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::AwaitingFirstSignature => "Submit First Signature",
            _ => "Complete Assessment",
        }
    }

    /// Phase reached by a submit from this phase, if any
    pub(crate) fn after_submit(&self) -> Option<Self> {
        match self {
            Self::AwaitingFirstSignature => Some(Self::AwaitingSecondSignature),
            Self::AwaitingSecondSignature => Some(Self::Completed),
            Self::NotStarted | Self::Completed => None,
        }
    }
}
