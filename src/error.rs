//! Error types for the portal state machine and its embedded data.

use thiserror::Error;

use crate::model::View;

/// Rejected operations. State is left untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PortalError {
    #[error("no exam with id `{0}` in the catalog")]
    UnknownExam(String),
    #[error("no exam is selected")]
    NoActiveExam,
    #[error("cannot {action} from the {from} view")]
    InvalidTransition { from: View, action: &'static str },
    #[error("no assessment is in progress")]
    NotInExam,
    #[error("question {index} is out of range (0..{len})")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("option {option} is out of range for question {question} (0..{len})")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        len: usize,
    },
    #[error("exam `{0}` has no questions")]
    EmptyQuestionBank(String),
}

/// Errors raised while loading the embedded catalog, question bank or config.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid data: {0}")]
    Invalid(String),
}
