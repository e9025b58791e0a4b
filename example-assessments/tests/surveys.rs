//! End-to-end runs of the bundled surveys.

use assessment::{AssessmentSession, QuestionId, RadarChart, ScriptedAnswers};
use example_assessments::{
    ConfiguredSurvey, STUDY_HABITS_ACCENT, study_habits_config, wellbeing_catalog,
    wellbeing_engine,
};
use proptest::prelude::*;

#[test]
fn study_habits_loads() -> anyhow::Result<()> {
    let config = study_habits_config()?;
    assert_eq!(config.question_count, Some(8));

    let survey = ConfiguredSurvey::study_habits()?;
    assert_eq!(survey.catalog.len(), 8);
    let axes: Vec<&str> = survey
        .engine
        .strategy()
        .dimensions()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(axes, vec!["Tập trung", "Kế hoạch", "Tự học", "Nghỉ ngơi"]);
    assert!(survey.engine.strategy().is_reversed(QuestionId::new(2)));
    assert!(survey.engine.strategy().is_reversed(QuestionId::new(8)));
    Ok(())
}

#[test]
fn study_habits_always_five() -> anyhow::Result<()> {
    let survey = ConfiguredSurvey::study_habits()?;
    let mut session = AssessmentSession::new(&survey.catalog);
    ScriptedAnswers::new()
        .with_same_answer(survey.catalog.ids(), "5")
        .play(&mut session)?;

    // reverse-keyed questions 2 and 8 earn nothing for "5"
    let result = session.submit(&survey.engine)?;
    assert_eq!(result.score, 75.0);
    assert_eq!(result.level, "Trung bình");
    assert!(result.conclusion.contains("mức Trung bình"));
    assert_eq!(result.advice.len(), 2);

    let chart = RadarChart::project(&result, STUDY_HABITS_ACCENT);
    assert_eq!(chart.values(), vec![50.0, 100.0, 100.0, 50.0]);
    assert_eq!(chart.style.line_color, STUDY_HABITS_ACCENT);
    Ok(())
}

#[test]
fn study_habits_best_answers() -> anyhow::Result<()> {
    let survey = ConfiguredSurvey::study_habits()?;
    let mut session = AssessmentSession::new(&survey.catalog);
    ScriptedAnswers::new()
        .with_same_answer(survey.catalog.ids(), "5")
        .with_answer(2, "1")
        .with_answer(8, "1")
        .play(&mut session)?;

    let result = session.submit(&survey.engine)?;
    assert_eq!(result.score, 100.0);
    assert_eq!(result.level, "Cao");
    assert!(result.radar_data.iter().all(|point| point.value == 100.0));
    Ok(())
}

#[test]
fn study_habits_progress_while_answering() -> anyhow::Result<()> {
    let survey = ConfiguredSurvey::study_habits()?;
    let mut session = AssessmentSession::new(&survey.catalog);
    session.set_answer(1, "3")?;
    session.set_answer(5, "4")?;
    session.set_answer(6, "2")?;

    let progress = session.progress();
    assert_eq!((progress.answered, progress.total), (3, 8));
    assert_eq!(progress.percentage, 38);
    assert_eq!(session.first_unanswered().unwrap().as_str(), "question-2");
    assert!(session.set_answer(3, "6").is_err());
    Ok(())
}

#[test]
fn wellbeing_check() -> anyhow::Result<()> {
    let catalog = wellbeing_catalog()?;
    let engine = wellbeing_engine()?;
    let mut session = AssessmentSession::new(&catalog);
    ScriptedAnswers::new()
        .with_answer(1, "3")
        .with_answer(2, "3")
        .with_answer(3, "1")
        .with_answer(4, "2")
        .with_answer(5, "0")
        .with_answer(6, "0")
        .play(&mut session)?;

    // 9 of 18 strain points
    let result = session.submit(&engine)?;
    assert_eq!(result.score, 50.0);
    assert_eq!(result.level, "Worth watching");
    assert_eq!(result.advice[0], "Plan one restful activity for the weekend.");
    let values: Vec<f64> = result.radar_data.iter().map(|point| point.value).collect();
    assert_eq!(values, vec![0.0, 50.0, 100.0]);
    Ok(())
}

proptest! {
    #[test]
    fn prop_wellbeing_is_deterministic(picks in prop::collection::vec(0u8..4, 6)) {
        let catalog = wellbeing_catalog().unwrap();
        let engine = wellbeing_engine().unwrap();
        let script = catalog
            .ids()
            .zip(&picks)
            .fold(ScriptedAnswers::new(), |script, (id, pick)| {
                script.with_answer(id, pick.to_string())
            });

        let mut first = AssessmentSession::new(&catalog);
        script.play(&mut first).unwrap();
        let mut second = AssessmentSession::new(&catalog);
        script.play(&mut second).unwrap();

        let a = first.submit(&engine).unwrap();
        let b = second.submit(&engine).unwrap();
        prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
        prop_assert_eq!(a, b);
    }
}
