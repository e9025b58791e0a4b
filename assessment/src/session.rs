use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    AnswerStore, AssessmentError, AssessmentResult, Catalog, Locator, Navigator, Progress,
    QuestionId, QuestionMarker, ResultEngine, ScoringStrategy,
};

/// A radio selection coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub question: QuestionId,
    pub value: String,
}

impl SelectionEvent {
    pub fn new(question: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            value: value.into(),
        }
    }
}

/// One user's run through a survey.
///
/// The session owns the `AnswerStore`; the catalog is shared and read-only.
/// Dropping the session abandons it, `submit` consumes it.
#[derive(Debug, Clone)]
pub struct AssessmentSession<'c> {
    catalog: &'c Catalog,
    answers: AnswerStore,
}

impl<'c> AssessmentSession<'c> {
    /// Start an empty session.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            answers: AnswerStore::new(),
        }
    }

    /// Continue a session from a previously saved store.
    ///
    /// Every entry must still be a valid answer for the catalog.
    pub fn resume(catalog: &'c Catalog, answers: AnswerStore) -> Result<Self, AssessmentError> {
        answers.validate_against(catalog)?;
        debug!(answered = answers.len(), "session resumed");
        Ok(Self { catalog, answers })
    }

    /// Record a selection.
    pub fn select(&mut self, event: SelectionEvent) -> Result<(), AssessmentError> {
        self.set_answer(event.question, event.value)
    }

    /// Record `value` as the answer to `question`, replacing any earlier answer.
    pub fn set_answer(
        &mut self,
        question: impl Into<QuestionId>,
        value: impl Into<String>,
    ) -> Result<(), AssessmentError> {
        let question = question.into();
        let value = value.into();
        if let Err(err) = self.answers.set_answer(self.catalog, question, value.clone()) {
            debug!(%question, value = %value, %err, "selection rejected");
            return Err(err);
        }
        debug!(%question, value = %value, "answer selected");
        Ok(())
    }

    pub fn get_answer(&self, question: impl Into<QuestionId>) -> Option<&str> {
        self.answers.get_answer(question.into())
    }

    /// Forget the answer to one question.
    pub fn clear_answer(&mut self, question: impl Into<QuestionId>) -> Option<String> {
        let question = question.into();
        let removed = self.answers.clear_answer(question);
        if removed.is_some() {
            debug!(%question, "answer cleared");
        }
        removed
    }

    /// Forget all answers.
    pub fn reset(&mut self) {
        debug!(answered = self.answers.len(), "session reset");
        self.answers.clear();
    }

    pub fn progress(&self) -> Progress {
        Progress::compute(&self.answers, self.catalog)
    }

    pub fn navigator(&self) -> Navigator<'c> {
        Navigator::new(self.catalog)
    }

    /// Jump-grid markers reflecting the current answers.
    pub fn markers(&self) -> Vec<QuestionMarker> {
        self.navigator().markers(&self.answers)
    }

    /// Locator of the first unanswered question, if any.
    pub fn first_unanswered(&self) -> Option<Locator> {
        self.navigator().first_unanswered(&self.answers)
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.catalog.is_empty() && self.answers.is_complete(self.catalog)
    }

    /// Score the survey and end the session.
    ///
    /// On error the session is gone as well; callers that want to keep editing
    /// check `can_submit` first.
    pub fn submit<S: ScoringStrategy>(
        self,
        engine: &ResultEngine<S>,
    ) -> Result<AssessmentResult, AssessmentError> {
        let progress = self.progress();
        info!(
            answered = progress.answered,
            total = progress.total,
            "submitting assessment"
        );
        engine.score(&self.answers, self.catalog)
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// End the session and keep its answers, e.g. to save them.
    pub fn into_answers(self) -> AnswerStore {
        self.answers
    }
}
