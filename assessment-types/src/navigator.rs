use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AnswerStore, AssessmentError, Catalog, QuestionId};

/// Where the presentation layer scrolls to bring a question into view, e.g. `"question-4"`.
///
/// The engine never scrolls or focuses anything itself; it only hands out locators.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator {
    anchor: String,
}

impl Locator {
    /// Prefix of every question anchor.
    pub const PREFIX: &'static str = "question-";

    /// Create the locator for a question id.
    pub fn for_question(id: QuestionId) -> Self {
        Self {
            anchor: format!("{}{}", Self::PREFIX, id),
        }
    }

    /// Get the anchor as a string slice.
    pub fn as_str(&self) -> &str {
        &self.anchor
    }

    /// Get the question id back from the anchor, if it is a question anchor.
    pub fn question(&self) -> Option<QuestionId> {
        self.anchor
            .strip_prefix(Self::PREFIX)?
            .parse::<u32>()
            .ok()
            .map(QuestionId::new)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor)
    }
}

/// One cell of the "jump to question" grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMarker {
    pub id: QuestionId,

    /// 1-based number shown in the cell.
    pub number: usize,

    pub answered: bool,

    pub locator: Locator,
}

/// Maps question ids to locators in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'c> {
    catalog: &'c Catalog,
}

impl<'c> Navigator<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Get the locator for a question.
    pub fn target_for(&self, id: QuestionId) -> Result<Locator, AssessmentError> {
        self.catalog.require(id)?;
        Ok(Locator::for_question(id))
    }

    /// Get the locator of the question after `id`, or `None` for the last question.
    pub fn next(&self, id: QuestionId) -> Result<Option<Locator>, AssessmentError> {
        let position = self.position(id)?;
        Ok(self
            .catalog
            .questions()
            .get(position + 1)
            .map(|question| Locator::for_question(question.id())))
    }

    /// Get the locator of the question before `id`, or `None` for the first question.
    pub fn previous(&self, id: QuestionId) -> Result<Option<Locator>, AssessmentError> {
        let position = self.position(id)?;
        Ok(position
            .checked_sub(1)
            .map(|before| Locator::for_question(self.catalog.questions()[before].id())))
    }

    /// Get the locator of the first unanswered question in display order.
    pub fn first_unanswered(&self, answers: &AnswerStore) -> Option<Locator> {
        answers
            .unanswered(self.catalog)
            .next()
            .map(Locator::for_question)
    }

    /// Get one marker per question, in display order.
    pub fn markers(&self, answers: &AnswerStore) -> Vec<QuestionMarker> {
        self.catalog
            .ids()
            .enumerate()
            .map(|(index, id)| QuestionMarker {
                id,
                number: index + 1,
                answered: answers.contains(id),
                locator: Locator::for_question(id),
            })
            .collect()
    }

    fn position(&self, id: QuestionId) -> Result<usize, AssessmentError> {
        self.catalog
            .position(id)
            .ok_or(AssessmentError::UnknownQuestion(id))
    }
}
