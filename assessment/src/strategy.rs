use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    AnswerStore, AssessmentError, Catalog, DimensionScore, QuestionId, Scored, ScoringStrategy,
};

/// A named group of questions scored together; one radar axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub questions: Vec<QuestionId>,
}

impl Dimension {
    pub fn new(name: impl Into<String>, questions: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            questions: questions.into_iter().map(QuestionId::new).collect(),
        }
    }
}

/// Likert-style scoring over ordered options.
///
/// An answer is worth its option's position in the question (first option 0,
/// last option `len - 1`); reverse-keyed questions count from the other end.
/// The overall score is the percentage of the attainable points over the whole
/// catalog and each dimension is the same percentage over its own questions,
/// both rounded to whole numbers.
///
/// A strategy is checked against one catalog in `new` and must only score
/// that catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionStrategy {
    dimensions: Vec<Dimension>,
    reversed: BTreeSet<QuestionId>,
    catalog_len: usize,
}

impl DimensionStrategy {
    /// Create a strategy for `catalog`.
    ///
    /// Fails with `AssessmentError::Configuration` if a dimension is empty,
    /// a dimension name repeats, or a dimension or reverse-keyed id is not in the catalog.
    pub fn new(
        catalog: &Catalog,
        dimensions: Vec<Dimension>,
        reversed: impl IntoIterator<Item = QuestionId>,
    ) -> Result<Self, AssessmentError> {
        let mut names = HashSet::new();
        for dimension in &dimensions {
            if !names.insert(dimension.name.as_str()) {
                return Err(AssessmentError::configuration(format!(
                    "duplicate dimension '{}'",
                    dimension.name
                )));
            }
            if dimension.questions.is_empty() {
                return Err(AssessmentError::configuration(format!(
                    "dimension '{}' has no questions",
                    dimension.name
                )));
            }
            if let Some(id) = dimension.questions.iter().find(|id| !catalog.contains(**id)) {
                return Err(AssessmentError::configuration(format!(
                    "dimension '{}' refers to unknown question {id}",
                    dimension.name
                )));
            }
        }

        let reversed: BTreeSet<QuestionId> = reversed.into_iter().collect();
        if let Some(id) = reversed.iter().find(|id| !catalog.contains(**id)) {
            return Err(AssessmentError::configuration(format!(
                "reverse-keyed question {id} is not in the catalog"
            )));
        }

        Ok(Self {
            dimensions,
            reversed,
            catalog_len: catalog.len(),
        })
    }

    /// Get the dimensions in axis order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Check if a question is reverse-keyed.
    pub fn is_reversed(&self, id: QuestionId) -> bool {
        self.reversed.contains(&id)
    }

    /// Earned and attainable points for one question.
    fn points(&self, catalog: &Catalog, answers: &AnswerStore, id: QuestionId) -> (usize, usize) {
        let Some(question) = catalog.question(id) else {
            return (0, 0);
        };
        let max = question.options().len() - 1;
        let earned = answers
            .get_answer(id)
            .and_then(|value| question.position_of(value))
            .map(|position| if self.is_reversed(id) { max - position } else { position })
            .unwrap_or(0);
        (earned, max)
    }

    fn percent_of(
        &self,
        catalog: &Catalog,
        answers: &AnswerStore,
        ids: impl Iterator<Item = QuestionId>,
    ) -> f64 {
        let (earned, max) = ids
            .map(|id| self.points(catalog, answers, id))
            .fold((0, 0), |(earned, max), (e, m)| (earned + e, max + m));
        if max == 0 {
            return 0.0;
        }
        (100.0 * earned as f64 / max as f64).round()
    }
}

impl ScoringStrategy for DimensionStrategy {
    fn score(&self, catalog: &Catalog, answers: &AnswerStore) -> Scored {
        debug_assert_eq!(
            catalog.len(),
            self.catalog_len,
            "strategy used with a catalog it was not built for"
        );
        Scored {
            score: self.percent_of(catalog, answers, catalog.ids()),
            dimensions: self
                .dimensions
                .iter()
                .map(|dimension| {
                    DimensionScore::new(
                        dimension.name.clone(),
                        self.percent_of(catalog, answers, dimension.questions.iter().copied()),
                    )
                })
                .collect(),
        }
    }
}
