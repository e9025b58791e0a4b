//! Score a saved answer sheet and print the result and radar chart as JSON.
//!
//! ```text
//! assess --answers answers.json
//! assess --survey my_survey.toml --answers answers.json --accent "#fa8c16"
//! ```
//!
//! The answer file is either a map (`{"1": "4", "2": "2"}`) or a list of
//! selections (`[{"question": 1, "value": "4"}]`), replayed in order.

use std::path::PathBuf;

use anyhow::{Context, bail};
use assessment::{
    AnswerStore, AssessmentSession, RadarChart, ScriptedAnswers, SelectionEvent, SurveyConfig,
};
use clap::Parser;
use example_assessments::{STUDY_HABITS_ACCENT, ConfiguredSurvey, study_habits_config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assess", version, about = "Score a self-assessment answer sheet")]
struct Cli {
    /// Survey file (TOML, or JSON with a .json extension). Defaults to the bundled study-habits survey.
    #[arg(long)]
    survey: Option<PathBuf>,

    /// Answer sheet (JSON)
    #[arg(long)]
    answers: PathBuf,

    /// Accent color for the radar chart
    #[arg(long, default_value = STUDY_HABITS_ACCENT)]
    accent: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.survey {
        Some(path) => SurveyConfig::from_path(path)?,
        None => study_habits_config()?,
    };
    let survey = ConfiguredSurvey::from_config(&config)?;

    let sheet = std::fs::read_to_string(&cli.answers)
        .with_context(|| format!("reading {}", cli.answers.display()))?;
    let script = parse_sheet(&sheet)?;
    info!(
        survey = %survey.title,
        selections = script.len(),
        path = %cli.answers.display(),
        "answer sheet loaded"
    );

    let mut session = AssessmentSession::new(&survey.catalog);
    script.play(&mut session)?;

    if !session.can_submit() {
        let progress = session.progress();
        let open: Vec<String> = session
            .answers()
            .unanswered(&survey.catalog)
            .map(|id| id.to_string())
            .collect();
        warn!(missing = open.len(), "answer sheet is incomplete");
        bail!(
            "{} of {} questions answered ({}%), missing: {}",
            progress.answered,
            progress.total,
            progress.percentage,
            open.join(", ")
        );
    }

    let result = session.submit(&survey.engine)?;
    let chart = RadarChart::project(&result, &cli.accent);
    let output = serde_json::json!({
        "title": survey.title,
        "result": result,
        "chart": chart,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_sheet(sheet: &str) -> anyhow::Result<ScriptedAnswers> {
    if let Ok(script) = serde_json::from_str::<ScriptedAnswers>(sheet) {
        return Ok(script);
    }
    let answers: AnswerStore =
        serde_json::from_str(sheet).context("answer sheet is neither a map nor a selection list")?;
    Ok(answers
        .iter()
        .map(|(question, value)| SelectionEvent::new(question, value))
        .collect())
}
