use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    AdviceTable, AssessmentError, Catalog, Dimension, DimensionStrategy, LevelBand, LevelBands,
    LevelGuidance, Question, QuestionId, QuestionOption, ResultEngine,
};

/// Error type for loading a survey configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read survey config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML survey config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON survey config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] AssessmentError),
}

/// A question as written in a survey file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionConfig {
    pub id: QuestionId,
    pub text: String,

    /// Radar axis this question contributes to.
    #[serde(default)]
    pub dimension: Option<String>,

    /// Count the options from the other end when scoring.
    #[serde(default)]
    pub reverse: bool,

    pub options: Vec<QuestionOption>,
}

/// A level band together with its conclusion and advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelConfig {
    pub min_score: f64,
    pub label: String,
    pub conclusion: String,
    #[serde(default)]
    pub advice: Vec<String>,
}

/// A complete survey description: questions, scoring dimensions and result texts.
///
/// ```toml
/// title = "Thói quen học tập"
/// question_count = 1
///
/// [[questions]]
/// id = 1
/// text = "Tôi lập kế hoạch học tập mỗi tuần."
/// dimension = "Kế hoạch"
/// options = [
///     { value = "1", label = "Không bao giờ" },
///     { value = "2", label = "Luôn luôn" },
/// ]
///
/// [[levels]]
/// min_score = 0
/// label = "Thấp"
/// conclusion = "Mức độ của bạn: {level}."
/// advice = ["Bắt đầu với mục tiêu nhỏ."]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurveyConfig {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// The question count announced to the user; must match `questions`.
    #[serde(default)]
    pub question_count: Option<usize>,

    pub questions: Vec<QuestionConfig>,

    pub levels: Vec<LevelConfig>,
}

impl SurveyConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a `.json` file as JSON and anything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source)?,
            _ => Self::from_toml_str(&source)?,
        };
        info!(
            path = %path.display(),
            title = %config.title,
            questions = config.questions.len(),
            "survey config loaded"
        );
        Ok(config)
    }

    /// Build the catalog, checking the announced question count.
    pub fn catalog(&self) -> Result<Catalog, AssessmentError> {
        if let Some(declared) = self.question_count {
            if declared != self.questions.len() {
                return Err(AssessmentError::configuration(format!(
                    "survey '{}' announces {declared} questions but defines {}",
                    self.title,
                    self.questions.len()
                )));
            }
        }
        Catalog::new(
            self.questions
                .iter()
                .map(|question| {
                    Question::new(question.id, question.text.clone(), question.options.clone())
                })
                .collect(),
        )
    }

    /// Dimensions in order of first appearance.
    pub fn dimensions(&self) -> Vec<Dimension> {
        let mut dimensions: Vec<Dimension> = Vec::new();
        for question in &self.questions {
            let Some(name) = &question.dimension else {
                continue;
            };
            match dimensions.iter_mut().find(|dimension| &dimension.name == name) {
                Some(dimension) => dimension.questions.push(question.id),
                None => dimensions.push(Dimension {
                    name: name.clone(),
                    questions: vec![question.id],
                }),
            }
        }
        dimensions
    }

    pub fn strategy(&self, catalog: &Catalog) -> Result<DimensionStrategy, AssessmentError> {
        let reversed = self
            .questions
            .iter()
            .filter(|question| question.reverse)
            .map(|question| question.id);
        DimensionStrategy::new(catalog, self.dimensions(), reversed)
    }

    pub fn bands(&self) -> Result<LevelBands, AssessmentError> {
        LevelBands::new(
            self.levels
                .iter()
                .map(|level| LevelBand::new(level.min_score, level.label.clone()))
                .collect(),
        )
    }

    pub fn advice(&self) -> AdviceTable {
        let mut table = AdviceTable::new();
        for level in &self.levels {
            table.insert(
                level.label.clone(),
                LevelGuidance::new(level.conclusion.clone(), level.advice.clone()),
            );
        }
        table
    }

    /// Build a ready-to-use engine for `catalog`.
    pub fn engine(
        &self,
        catalog: &Catalog,
    ) -> Result<ResultEngine<DimensionStrategy>, AssessmentError> {
        ResultEngine::new(self.strategy(catalog)?, self.bands()?, self.advice())
    }
}
