use serde::{Deserialize, Serialize};

/// Value of one named sub-dimension, as produced by a `ScoringStrategy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    pub value: f64,
}

impl DimensionScore {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Output of a `ScoringStrategy`: the scalar score and the sub-dimension values in axis order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scored {
    pub score: f64,
    pub dimensions: Vec<DimensionScore>,
}

/// One axis of the radar chart, on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub name: String,
    pub value: f64,
}

impl From<DimensionScore> for RadarPoint {
    fn from(dimension: DimensionScore) -> Self {
        Self {
            name: dimension.name,
            value: dimension.value,
        }
    }
}

/// The scored outcome of a completed survey.
///
/// Built once per submission and only re-rendered afterwards. Serializes with
/// camelCase keys (`radarData`) so it can be stored and replayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub score: f64,

    /// Label of the level band the score falls into.
    pub level: String,

    pub conclusion: String,

    /// Recommendations, highest priority first.
    pub advice: Vec<String>,

    /// One entry per scored sub-dimension; the order is the radar axis order.
    pub radar_data: Vec<RadarPoint>,
}
