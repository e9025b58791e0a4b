use crate::QuestionId;

/// Error type for assessment operations.
///
/// Every variant is a local condition the caller can recover from, typically
/// by blocking the UI action that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    /// The question id is not part of the catalog.
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// The value is not one of the question's option values.
    #[error("Invalid option '{value}' for question {question}")]
    InvalidOption { question: QuestionId, value: String },

    /// Scoring was attempted before every question was answered.
    #[error("Survey incomplete: {answered} of {total} questions answered")]
    IncompleteSurvey { answered: usize, total: usize },

    /// Catalog, level bands or advice table are misconfigured.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AssessmentError {
    /// Create a configuration error from any message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this error is a configuration invariant violation rather than a user error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
