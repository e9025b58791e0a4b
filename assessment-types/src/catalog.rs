use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{AssessmentError, Question, QuestionId};

/// The ordered, immutable set of questions of a survey.
///
/// The order is the canonical display and navigation order; it is never
/// changed after construction. A catalog is presentation-agnostic: it can be
/// rendered as one scrolling list, a paged wizard, or a printable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Create a catalog from questions in display order.
    ///
    /// Fails with `AssessmentError::Configuration` if two questions share an id,
    /// or a question has no options, an empty option value, or duplicate option values.
    pub fn new(questions: Vec<Question>) -> Result<Self, AssessmentError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(AssessmentError::configuration(format!(
                    "duplicate question id {}",
                    question.id()
                )));
            }
            if let Some(problem) = question.option_problem() {
                return Err(AssessmentError::Configuration(problem));
            }
        }
        Ok(Self { questions })
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Get the questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question with the given id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Get the question with the given id, or `UnknownQuestion`.
    pub fn require(&self, id: QuestionId) -> Result<&Question, AssessmentError> {
        self.question(id)
            .ok_or(AssessmentError::UnknownQuestion(id))
    }

    /// Get the display position (0-based) of the question with the given id.
    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|question| question.id() == id)
    }

    /// Check if the catalog contains the given id.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.question(id).is_some()
    }

    /// Get the question ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(Question::id)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Question>> for Catalog {
    type Error = AssessmentError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<Catalog> for Vec<Question> {
    fn from(catalog: Catalog) -> Self {
        catalog.questions
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
