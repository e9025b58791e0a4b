//! # assessment
//!
//! Self-assessment survey engine. Presentation-agnostic.
//!
//! The engine tracks single-choice answers against a fixed question catalog,
//! reports progress and navigation targets for the UI, and turns a completed
//! survey into a scored, leveled result with advice and a radar-chart series.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use assessment::{AssessmentSession, RadarChart, SurveyConfig};
//!
//! let config = SurveyConfig::from_toml_str(include_str!("study_habits.toml"))?;
//! let catalog = config.catalog()?;
//! let engine = config.engine(&catalog)?;
//!
//! let mut session = AssessmentSession::new(&catalog);
//! session.set_answer(1, "often")?;
//! // ... one selection per radio click
//! println!("{}%", session.progress().percentage);
//!
//! let result = session.submit(&engine)?;
//! let chart = RadarChart::project(&result, "#1677ff");
//! ```
//!
//! ## Pieces
//!
//! - `AnswerStore`, `Progress`, `Navigator` - read/write model behind the question list
//! - `ScoringStrategy` - survey-specific scoring, e.g. the built-in `DimensionStrategy`
//! - `LevelBands` and `AdviceTable` - map a score to a level, conclusion and advice
//! - `ResultEngine` - validates completeness and assembles the `AssessmentResult`
//! - `RadarChart` - the chart-ready projection of the result's dimensions
//! - `SurveyConfig` - loads all of the above from TOML or JSON

// Re-export all types from assessment-types
pub use assessment_types::*;

mod bands;
pub use bands::{LevelBand, LevelBands};

mod advice;
pub use advice::{AdviceTable, LevelGuidance};

mod strategy;
pub use strategy::{Dimension, DimensionStrategy};

mod engine;
pub use engine::ResultEngine;

mod radar;
pub use radar::{RadarChart, RadarIndicator, RadarStyle, to_series};

mod session;
pub use session::{AssessmentSession, SelectionEvent};

mod config;
pub use config::{ConfigError, LevelConfig, QuestionConfig, SurveyConfig};

// Replays fixed selections into a session without user interaction
mod scripted;
pub use scripted::ScriptedAnswers;
