use tracing::{debug, info};

use crate::{
    AdviceTable, AnswerStore, AssessmentError, AssessmentResult, Catalog, LevelBands, Progress,
    RadarPoint, ScoringStrategy,
};

/// Turns a complete `AnswerStore` into an `AssessmentResult`.
///
/// The survey-specific part is the strategy; banding, conclusion and advice
/// lookup are table driven, so the same inputs always give the same result.
#[derive(Debug, Clone)]
pub struct ResultEngine<S> {
    strategy: S,
    bands: LevelBands,
    advice: AdviceTable,
}

impl<S: ScoringStrategy> ResultEngine<S> {
    /// Create an engine.
    ///
    /// Fails with `AssessmentError::Configuration` if a band label has no entry in the advice table.
    pub fn new(strategy: S, bands: LevelBands, advice: AdviceTable) -> Result<Self, AssessmentError> {
        if let Some(label) = bands.labels().find(|label| !advice.contains(label)) {
            return Err(AssessmentError::configuration(format!(
                "level '{label}' has no advice entry"
            )));
        }
        Ok(Self {
            strategy,
            bands,
            advice,
        })
    }

    /// Score a completed survey.
    ///
    /// Fails with `InvalidOption` or `UnknownQuestion` if a stored answer is not
    /// valid for `catalog` (a deserialized store is not checked on load), with
    /// `IncompleteSurvey` if any catalog question is unanswered and with
    /// `Configuration` if the score falls outside every level band.
    pub fn score(
        &self,
        answers: &AnswerStore,
        catalog: &Catalog,
    ) -> Result<AssessmentResult, AssessmentError> {
        answers.validate_against(catalog)?;
        let progress = Progress::compute(answers, catalog);
        if !answers.is_complete(catalog) {
            return Err(AssessmentError::IncompleteSurvey {
                answered: progress.answered,
                total: progress.total,
            });
        }

        let scored = self.strategy.score(catalog, answers);
        let level = self.bands.level_for(scored.score)?;
        debug!(score = scored.score, level, "score banded");

        let result = AssessmentResult {
            score: scored.score,
            level: level.to_string(),
            conclusion: self.advice.conclusion(level)?,
            advice: self.advice.advice(level)?.to_vec(),
            radar_data: scored.dimensions.into_iter().map(RadarPoint::from).collect(),
        };
        info!(
            score = result.score,
            level = %result.level,
            dimensions = result.radar_data.len(),
            "assessment scored"
        );
        Ok(result)
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn bands(&self) -> &LevelBands {
        &self.bands
    }

    pub fn advice(&self) -> &AdviceTable {
        &self.advice
    }
}
