pub mod study_habits;
pub mod wellbeing;

// Re-export study_habits types
pub use study_habits::{
    STUDY_HABITS_ACCENT, STUDY_HABITS_TOML, ConfiguredSurvey, study_habits_config,
};

// Re-export wellbeing types
pub use wellbeing::{WellbeingStrategy, wellbeing_catalog, wellbeing_engine};
