use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AssessmentError, Catalog, QuestionId};

/// The selected option value per question for one survey session.
///
/// A missing key means the question is unanswered. Clearing an answer removes
/// the key, so an empty string is never stored. Entries iterate in ascending
/// question id order, which keeps serialized stores and scoring stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    values: BTreeMap<QuestionId, String>,
}

impl AnswerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Select `value` for the question, replacing any earlier answer.
    ///
    /// Fails with `UnknownQuestion` if the id is not in the catalog and with
    /// `InvalidOption` if the value is not one of the question's option values.
    pub fn set_answer(
        &mut self,
        catalog: &Catalog,
        question: QuestionId,
        value: impl Into<String>,
    ) -> Result<(), AssessmentError> {
        let value = value.into();
        if !catalog.require(question)?.accepts(&value) {
            return Err(AssessmentError::InvalidOption { question, value });
        }
        self.values.insert(question, value);
        Ok(())
    }

    /// Get the selected value for the question.
    pub fn get_answer(&self, question: QuestionId) -> Option<&str> {
        self.values.get(&question).map(String::as_str)
    }

    /// Check if the question has an answer.
    pub fn contains(&self, question: QuestionId) -> bool {
        self.values.contains_key(&question)
    }

    /// Remove the answer for one question.
    pub fn clear_answer(&mut self, question: QuestionId) -> Option<String> {
        self.values.remove(&question)
    }

    /// Remove all answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Check if every question of the catalog has an answer.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        catalog.ids().all(|id| self.contains(id))
    }

    /// Count the catalog questions that have an answer.
    ///
    /// Entries for ids outside the catalog are not counted.
    pub fn answered_in(&self, catalog: &Catalog) -> usize {
        catalog.ids().filter(|id| self.contains(*id)).count()
    }

    /// Get the unanswered question ids in display order.
    pub fn unanswered<'c>(&'c self, catalog: &'c Catalog) -> impl Iterator<Item = QuestionId> + 'c {
        catalog.ids().filter(|id| !self.contains(*id))
    }

    /// Check every stored entry against the catalog.
    ///
    /// Used when a store was restored from outside the session, e.g. deserialized.
    pub fn validate_against(&self, catalog: &Catalog) -> Result<(), AssessmentError> {
        for (question, value) in &self.values {
            if !catalog.require(*question)?.accepts(value) {
                return Err(AssessmentError::InvalidOption {
                    question: *question,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Get an iterator over all id-value pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.values.iter().map(|(id, value)| (*id, value.as_str()))
    }

    /// Get the number of stored answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnswerStore {
    type Item = (&'a QuestionId, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, QuestionId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
