//! Replay fixed selections into a session without user interaction.
//!
//! `ScriptedAnswers` plays pre-defined selections, in order, into an
//! `AssessmentSession`. This is useful for testing surveys and for replaying
//! a saved answer sheet.
//!
//! # Example
//!
//! ```rust,ignore
//! use assessment::{AssessmentSession, ScriptedAnswers};
//!
//! let mut session = AssessmentSession::new(&catalog);
//! ScriptedAnswers::new()
//!     .with_answer(1, "often")
//!     .with_answer(2, "never")
//!     .play(&mut session)?;
//!
//! assert_eq!(session.progress().answered, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::{AssessmentError, AssessmentSession, QuestionId, SelectionEvent};

/// An ordered list of selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptedAnswers {
    selections: Vec<SelectionEvent>,
}

impl ScriptedAnswers {
    /// Create an empty script.
    pub fn new() -> Self {
        Self {
            selections: Vec::new(),
        }
    }

    /// Append a selection. Later selections for the same question overwrite earlier ones.
    pub fn with_answer(mut self, question: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.selections.push(SelectionEvent::new(question, value));
        self
    }

    /// Append the same value for every question in `questions`.
    pub fn with_same_answer(
        mut self,
        questions: impl IntoIterator<Item = QuestionId>,
        value: &str,
    ) -> Self {
        self.selections.extend(
            questions
                .into_iter()
                .map(|question| SelectionEvent::new(question, value)),
        );
        self
    }

    /// Get the selections in play order.
    pub fn selections(&self) -> &[SelectionEvent] {
        &self.selections
    }

    /// Play every selection into the session.
    ///
    /// Stops at the first selection the session rejects; selections before it stay applied.
    pub fn play(&self, session: &mut AssessmentSession<'_>) -> Result<(), AssessmentError> {
        for selection in &self.selections {
            session.select(selection.clone())?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl FromIterator<SelectionEvent> for ScriptedAnswers {
    fn from_iter<I: IntoIterator<Item = SelectionEvent>>(iter: I) -> Self {
        Self {
            selections: iter.into_iter().collect(),
        }
    }
}
