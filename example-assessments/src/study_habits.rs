use assessment::{AssessmentError, Catalog, ConfigError, DimensionStrategy, ResultEngine, SurveyConfig};

/// The bundled study-habits survey in TOML form.
pub const STUDY_HABITS_TOML: &str = include_str!("../surveys/study_habits.toml");

/// Accent color used for the study-habits radar chart.
pub const STUDY_HABITS_ACCENT: &str = "#1677ff";

/// Parsed study-habits survey.
pub fn study_habits_config() -> Result<SurveyConfig, ConfigError> {
    SurveyConfig::from_toml_str(STUDY_HABITS_TOML)
}

/// A survey loaded from configuration: the catalog and the engine that scores it.
#[derive(Debug, Clone)]
pub struct ConfiguredSurvey {
    pub title: String,
    pub catalog: Catalog,
    pub engine: ResultEngine<DimensionStrategy>,
}

impl ConfiguredSurvey {
    /// The bundled study-habits survey.
    pub fn study_habits() -> Result<Self, ConfigError> {
        let config = study_habits_config()?;
        Ok(Self::from_config(&config)?)
    }

    pub fn from_config(config: &SurveyConfig) -> Result<Self, AssessmentError> {
        let catalog = config.catalog()?;
        let engine = config.engine(&catalog)?;
        Ok(Self {
            title: config.title.clone(),
            catalog,
            engine,
        })
    }
}
