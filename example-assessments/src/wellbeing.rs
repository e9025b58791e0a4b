//! A short weekly wellbeing check defined in code, with its own scoring rules.
//!
//! Every option value is the number of days in the past week the statement
//! applied ("0" to "3" for none / some / more than half / nearly every day).
//! All statements describe strain, so the wellbeing score is the share of
//! strain points *not* reported.

use assessment::{
    AdviceTable, AnswerStore, AssessmentError, Catalog, DimensionScore, LevelBands, LevelGuidance,
    Question, QuestionId, QuestionOption, ResultEngine, Scored, ScoringStrategy,
};

const MAX_POINTS: u32 = 3;

const STATEMENTS: [(u32, &str); 6] = [
    (1, "I felt down or hopeless."),
    (2, "I felt nervous or on edge."),
    (3, "I felt too tired to do things I enjoy."),
    (4, "I had trouble sleeping."),
    (5, "I avoided talking to friends or family."),
    (6, "I felt I had no one to turn to."),
];

const AXES: [(&str, [u32; 2]); 3] = [
    ("Mood", [1, 2]),
    ("Energy", [3, 4]),
    ("Connection", [5, 6]),
];

fn frequency_options() -> Vec<QuestionOption> {
    vec![
        QuestionOption::new("0", "Not at all"),
        QuestionOption::new("1", "Several days"),
        QuestionOption::new("2", "More than half the days"),
        QuestionOption::new("3", "Nearly every day"),
    ]
}

pub fn wellbeing_catalog() -> Result<Catalog, AssessmentError> {
    Catalog::new(
        STATEMENTS
            .iter()
            .map(|(id, text)| Question::new(*id, *text, frequency_options()))
            .collect(),
    )
}

/// Inverted strain points, grouped into three axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WellbeingStrategy;

impl WellbeingStrategy {
    fn wellbeing(answers: &AnswerStore, ids: impl Iterator<Item = QuestionId>) -> f64 {
        let (strain, max) = ids.fold((0, 0), |(strain, max), id| {
            let points = answers
                .get_answer(id)
                .and_then(|value| value.parse::<u32>().ok())
                .unwrap_or(0)
                .min(MAX_POINTS);
            (strain + points, max + MAX_POINTS)
        });
        if max == 0 {
            return 0.0;
        }
        (100.0 - 100.0 * f64::from(strain) / f64::from(max)).round()
    }
}

impl ScoringStrategy for WellbeingStrategy {
    fn score(&self, catalog: &Catalog, answers: &AnswerStore) -> Scored {
        Scored {
            score: Self::wellbeing(answers, catalog.ids()),
            dimensions: AXES
                .iter()
                .map(|(name, ids)| {
                    DimensionScore::new(
                        *name,
                        Self::wellbeing(answers, ids.iter().copied().map(QuestionId::new)),
                    )
                })
                .collect(),
        }
    }
}

pub fn wellbeing_engine() -> Result<ResultEngine<WellbeingStrategy>, AssessmentError> {
    let bands = LevelBands::from_pairs([
        (0.0, "Needs support"),
        (40.0, "Worth watching"),
        (70.0, "Doing well"),
    ])?;
    let advice = AdviceTable::new()
        .with_level(
            "Needs support",
            LevelGuidance::new(
                "Your answers suggest this week was hard ({level}).",
                vec![
                    "Talk to someone you trust today.".to_string(),
                    "Contact the student counselling service.".to_string(),
                    "Keep a regular sleep schedule.".to_string(),
                ],
            ),
        )
        .with_level(
            "Worth watching",
            LevelGuidance::new(
                "Some strain showed up this week ({level}).",
                vec![
                    "Plan one restful activity for the weekend.".to_string(),
                    "Check in again next week.".to_string(),
                ],
            ),
        )
        .with_level(
            "Doing well",
            LevelGuidance::new("You seem to be {level}.", vec!["Keep it up.".to_string()]),
        );
    ResultEngine::new(WellbeingStrategy, bands, advice)
}
