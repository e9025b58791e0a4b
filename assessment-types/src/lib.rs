//! Core types for the assessment crate.
//!
//! This crate provides the foundational types for running a self-assessment survey:
//! - `Catalog`, `Question` and `QuestionOption` - The immutable question set
//! - `AnswerStore` - The session's selected option per question
//! - `Progress`, `Navigator` and `Locator` - Read-only views driving the UI
//! - `AssessmentResult` and `ScoringStrategy` - Scored outcomes and how they are computed

mod question;
pub use question::{Question, QuestionId, QuestionOption};

mod catalog;
pub use catalog::Catalog;

mod answers;
pub use answers::AnswerStore;

mod progress;
pub use progress::Progress;

mod navigator;
pub use navigator::{Locator, Navigator, QuestionMarker};

mod outcome;
pub use outcome::{AssessmentResult, DimensionScore, RadarPoint, Scored};

mod error;
pub use error::AssessmentError;

mod traits;
pub use traits::ScoringStrategy;
