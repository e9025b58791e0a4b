use serde::{Deserialize, Serialize};

use crate::AssessmentError;

/// A level that applies from `min_score` (inclusive) up to the next band's minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelBand {
    pub min_score: f64,
    pub label: String,
}

impl LevelBand {
    pub fn new(min_score: f64, label: impl Into<String>) -> Self {
        Self {
            min_score,
            label: label.into(),
        }
    }
}

/// Ordered threshold table mapping a score to a qualitative level.
///
/// Bands are sorted ascending by `min_score` with no two bands sharing a
/// minimum, so a score on a boundary belongs to the higher band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelBand>", into = "Vec<LevelBand>")]
pub struct LevelBands {
    bands: Vec<LevelBand>,
}

impl LevelBands {
    /// Create a band table.
    ///
    /// Fails with `AssessmentError::Configuration` if the table is empty, a
    /// minimum is not finite, or the minimums are not strictly ascending.
    pub fn new(bands: Vec<LevelBand>) -> Result<Self, AssessmentError> {
        if bands.is_empty() {
            return Err(AssessmentError::configuration("level band table is empty"));
        }
        if let Some(band) = bands.iter().find(|band| !band.min_score.is_finite()) {
            return Err(AssessmentError::configuration(format!(
                "level band '{}' has a non-finite minimum",
                band.label
            )));
        }
        for pair in bands.windows(2) {
            if pair[1].min_score <= pair[0].min_score {
                return Err(AssessmentError::configuration(format!(
                    "level band '{}' ({}) must start above '{}' ({})",
                    pair[1].label, pair[1].min_score, pair[0].label, pair[0].min_score
                )));
            }
        }
        Ok(Self { bands })
    }

    /// Build a table from `(min_score, label)` pairs.
    pub fn from_pairs<L: Into<String>>(
        pairs: impl IntoIterator<Item = (f64, L)>,
    ) -> Result<Self, AssessmentError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(min_score, label)| LevelBand::new(min_score, label))
                .collect(),
        )
    }

    /// Get the label of the band with the greatest `min_score <= score`.
    ///
    /// A score below the lowest band (or NaN) means the table does not cover
    /// the strategy's output range, which is reported as a configuration error.
    pub fn level_for(&self, score: f64) -> Result<&str, AssessmentError> {
        self.bands
            .iter()
            .rev()
            .find(|band| band.min_score <= score)
            .map(|band| band.label.as_str())
            .ok_or_else(|| {
                AssessmentError::configuration(format!("no level band covers score {score}"))
            })
    }

    /// Get the bands in ascending order.
    pub fn bands(&self) -> &[LevelBand] {
        &self.bands
    }

    /// Get the labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().map(|band| band.label.as_str())
    }
}

impl TryFrom<Vec<LevelBand>> for LevelBands {
    type Error = AssessmentError;

    fn try_from(bands: Vec<LevelBand>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<LevelBands> for Vec<LevelBand> {
    fn from(bands: LevelBands) -> Self {
        bands.bands
    }
}
