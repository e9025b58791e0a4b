use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::AssessmentError;

/// Conclusion template and advice shown for one level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelGuidance {
    /// Conclusion text; `{level}` is replaced with the level label.
    pub conclusion: String,

    /// Recommendations, highest priority first.
    #[serde(default)]
    pub advice: Vec<String>,
}

impl LevelGuidance {
    pub fn new(conclusion: impl Into<String>, advice: Vec<String>) -> Self {
        Self {
            conclusion: conclusion.into(),
            advice,
        }
    }
}

/// Lookup table from level label to conclusion and advice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdviceTable {
    levels: BTreeMap<String, LevelGuidance>,
}

impl AdviceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the guidance for a level.
    pub fn with_level(mut self, level: impl Into<String>, guidance: LevelGuidance) -> Self {
        self.insert(level, guidance);
        self
    }

    /// Add or replace the guidance for a level.
    pub fn insert(&mut self, level: impl Into<String>, guidance: LevelGuidance) {
        self.levels.insert(level.into(), guidance);
    }

    /// Get the guidance for a level.
    pub fn guidance(&self, level: &str) -> Result<&LevelGuidance, AssessmentError> {
        self.levels.get(level).ok_or_else(|| {
            AssessmentError::configuration(format!("no advice configured for level '{level}'"))
        })
    }

    /// Get the filled-in conclusion for a level.
    pub fn conclusion(&self, level: &str) -> Result<String, AssessmentError> {
        Ok(self.guidance(level)?.conclusion.replace("{level}", level))
    }

    /// Get the advice for a level, highest priority first.
    pub fn advice(&self, level: &str) -> Result<&[String], AssessmentError> {
        Ok(&self.guidance(level)?.advice)
    }

    /// Check if the table has guidance for a level.
    pub fn contains(&self, level: &str) -> bool {
        self.levels.contains_key(level)
    }
}
