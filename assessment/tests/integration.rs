//! Integration tests for assessment

use assessment::{
    AdviceTable, AnswerStore, AssessmentError, AssessmentResult, AssessmentSession, Catalog,
    Dimension, DimensionScore, DimensionStrategy, LevelBands, LevelGuidance, Progress, Question,
    QuestionId, QuestionOption, RadarChart, RadarPoint, ResultEngine, Scored, ScriptedAnswers,
    SurveyConfig, to_series,
};
use proptest::prelude::*;

fn five_questions() -> Catalog {
    Catalog::new(
        (1..=5)
            .map(|id| {
                Question::new(
                    id,
                    format!("Question {id}"),
                    vec![
                        QuestionOption::new("a", "Rarely"),
                        QuestionOption::new("b", "Sometimes"),
                        QuestionOption::new("c", "Often"),
                    ],
                )
            })
            .collect(),
    )
    .unwrap()
}

fn vietnamese_bands() -> LevelBands {
    LevelBands::from_pairs([(0.0, "Thấp"), (50.0, "Trung bình"), (80.0, "Cao")]).unwrap()
}

fn vietnamese_advice() -> AdviceTable {
    let guidance = |advice: &[&str]| {
        LevelGuidance::new(
            "Kết quả của bạn ở mức {level}.",
            advice.iter().map(|line| line.to_string()).collect(),
        )
    };
    AdviceTable::new()
        .with_level("Thấp", guidance(&["Đặt mục tiêu nhỏ", "Tìm người đồng hành"]))
        .with_level("Trung bình", guidance(&["Duy trì nhịp độ"]))
        .with_level("Cao", guidance(&[]))
}

fn engine(catalog: &Catalog) -> ResultEngine<DimensionStrategy> {
    let strategy = DimensionStrategy::new(
        catalog,
        vec![
            Dimension::new("Tập trung", [1, 2]),
            Dimension::new("Kế hoạch", [3, 4]),
            Dimension::new("Nghỉ ngơi", [5]),
        ],
        [QuestionId::new(5)],
    )
    .unwrap();
    ResultEngine::new(strategy, vietnamese_bands(), vietnamese_advice()).unwrap()
}

#[test]
fn test_progress_three_of_five() {
    let catalog = five_questions();
    let mut session = AssessmentSession::new(&catalog);
    ScriptedAnswers::new()
        .with_answer(1, "a")
        .with_answer(2, "b")
        .with_answer(3, "a")
        .play(&mut session)
        .unwrap();

    assert_eq!(
        session.progress(),
        Progress {
            answered: 3,
            total: 5,
            percentage: 60
        }
    );
}

#[test]
fn test_unknown_question_on_five_question_catalog() {
    let catalog = five_questions();
    let mut session = AssessmentSession::new(&catalog);
    assert_eq!(
        session.set_answer(99, "x"),
        Err(AssessmentError::UnknownQuestion(QuestionId::new(99)))
    );
}

#[test]
fn test_submit_before_complete() {
    let catalog = five_questions();
    let mut session = AssessmentSession::new(&catalog);
    session.set_answer(1, "c").unwrap();
    assert!(!session.can_submit());

    let err = session.submit(&engine(&catalog)).unwrap_err();
    assert_eq!(
        err,
        AssessmentError::IncompleteSurvey {
            answered: 1,
            total: 5
        }
    );
}

#[test]
fn test_full_flow() -> anyhow::Result<()> {
    let catalog = five_questions();
    let engine = engine(&catalog);
    let mut session = AssessmentSession::new(&catalog);
    ScriptedAnswers::new()
        .with_answer(1, "c")
        .with_answer(2, "c")
        .with_answer(3, "b")
        .with_answer(4, "a")
        .with_answer(5, "a")
        .play(&mut session)?;
    assert!(session.can_submit());
    assert_eq!(session.first_unanswered(), None);

    // points: 2, 2, 1, 0 and reverse-keyed 5 -> 2, out of 10
    let result = session.submit(&engine)?;
    assert_eq!(result.score, 70.0);
    assert_eq!(result.level, "Trung bình");
    assert_eq!(result.conclusion, "Kết quả của bạn ở mức Trung bình.");
    assert_eq!(result.advice, vec!["Duy trì nhịp độ".to_string()]);
    assert_eq!(
        result.radar_data,
        vec![
            RadarPoint {
                name: "Tập trung".to_string(),
                value: 100.0
            },
            RadarPoint {
                name: "Kế hoạch".to_string(),
                value: 25.0
            },
            RadarPoint {
                name: "Nghỉ ngơi".to_string(),
                value: 100.0
            },
        ]
    );

    let chart = RadarChart::project(&result, "#52c41a");
    assert_eq!(chart.values(), vec![100.0, 25.0, 100.0]);
    assert_eq!(chart.style.area_color, "rgba(82, 196, 26, 0.2)");
    Ok(())
}

#[test]
fn test_scoring_is_deterministic() {
    let catalog = five_questions();
    let engine = engine(&catalog);
    let mut answers = AnswerStore::new();
    for (id, value) in [(5, "b"), (1, "a"), (4, "c"), (2, "b"), (3, "c")] {
        answers.set_answer(&catalog, QuestionId::new(id), value).unwrap();
    }

    let first = engine.score(&answers, &catalog).unwrap();
    let second = engine.score(&answers, &catalog).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_closure_strategy() {
    let catalog = five_questions();
    let always_eighty = |_: &Catalog, _: &AnswerStore| Scored {
        score: 80.0,
        dimensions: vec![DimensionScore::new("Only", 80.0)],
    };
    let engine = ResultEngine::new(always_eighty, vietnamese_bands(), vietnamese_advice()).unwrap();

    let mut session = AssessmentSession::new(&catalog);
    ScriptedAnswers::new()
        .with_same_answer(catalog.ids(), "b")
        .play(&mut session)
        .unwrap();
    let result = session.submit(&engine).unwrap();
    assert_eq!(result.level, "Cao");
    assert!(result.advice.is_empty());
}

#[test]
fn test_level_band_boundaries() {
    let bands = vietnamese_bands();
    assert_eq!(bands.level_for(79.0).unwrap(), "Trung bình");
    assert_eq!(bands.level_for(80.0).unwrap(), "Cao");
}

#[test]
fn test_saved_answers_resume() -> anyhow::Result<()> {
    let catalog = five_questions();
    let mut session = AssessmentSession::new(&catalog);
    session.set_answer(2, "b")?;
    session.set_answer(4, "c")?;
    let saved = serde_json::to_string(&session.into_answers())?;

    let restored: AnswerStore = serde_json::from_str(&saved)?;
    let session = AssessmentSession::resume(&catalog, restored)?;
    assert_eq!(session.progress().answered, 2);
    let open: Vec<bool> = session.markers().iter().map(|m| m.answered).collect();
    assert_eq!(open, vec![false, true, false, true, false]);
    Ok(())
}

#[test]
fn test_result_replays_from_json() -> anyhow::Result<()> {
    let catalog = five_questions();
    let mut session = AssessmentSession::new(&catalog);
    ScriptedAnswers::new()
        .with_same_answer(catalog.ids(), "a")
        .play(&mut session)?;
    let result = session.submit(&engine(&catalog))?;

    let stored = serde_json::to_string(&result)?;
    assert!(stored.contains("\"radarData\""));
    let replayed: AssessmentResult = serde_json::from_str(&stored)?;
    assert_eq!(replayed, result);
    Ok(())
}

#[test]
fn test_config_driven_engine() -> anyhow::Result<()> {
    let config = SurveyConfig::from_toml_str(
        r#"
title = "Mini"
question_count = 2

[[questions]]
id = 1
text = "One"
dimension = "A"
options = [{ value = "0", label = "Zero" }, { value = "1", label = "One" }]

[[questions]]
id = 2
text = "Two"
dimension = "B"
options = [{ value = "0", label = "Zero" }, { value = "1", label = "One" }]

[[levels]]
min_score = 0
label = "Low"
conclusion = "{level}"

[[levels]]
min_score = 50
label = "High"
conclusion = "{level}!"
"#,
    )?;
    let catalog = config.catalog()?;
    let engine = config.engine(&catalog)?;

    let mut session = AssessmentSession::new(&catalog);
    session.set_answer(1, "1")?;
    session.set_answer(2, "0")?;
    let result = session.submit(&engine)?;
    assert_eq!(result.score, 50.0);
    assert_eq!(result.conclusion, "High!");
    let names: Vec<&str> = result.radar_data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    Ok(())
}

proptest! {
    #[test]
    fn prop_series_preserves_order_and_count(
        values in prop::collection::vec(-50.0f64..150.0, 0..12),
    ) {
        let result = AssessmentResult {
            score: 0.0,
            level: "Thấp".to_string(),
            conclusion: String::new(),
            advice: Vec::new(),
            radar_data: values
                .iter()
                .enumerate()
                .map(|(i, value)| RadarPoint { name: format!("axis-{i}"), value: *value })
                .collect(),
        };

        let series = to_series(&result);
        prop_assert_eq!(series.len(), result.radar_data.len());
        for (point, original) in series.iter().zip(&result.radar_data) {
            prop_assert_eq!(&point.name, &original.name);
            prop_assert!((0.0..=100.0).contains(&point.value));
            if (0.0..=100.0).contains(&original.value) {
                prop_assert_eq!(point.value, original.value);
            }
        }
    }

    #[test]
    fn prop_scores_stay_in_band_range(picks in prop::collection::vec(0usize..3, 5)) {
        let catalog = five_questions();
        let engine = engine(&catalog);
        let mut answers = AnswerStore::new();
        for (id, pick) in catalog.ids().zip(&picks) {
            answers.set_answer(&catalog, id, ["a", "b", "c"][*pick]).unwrap();
        }
        let result = engine.score(&answers, &catalog).unwrap();
        prop_assert!((0.0..=100.0).contains(&result.score));
        prop_assert_eq!(result.radar_data.len(), 3);
    }
}
