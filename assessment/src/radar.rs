use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{AssessmentResult, RadarPoint};

const AXIS_MIN: f64 = 0.0;
const AXIS_MAX: f64 = 100.0;
const SPLIT_NUMBER: u8 = 5;
const SYMBOL_SIZE: u8 = 6;
const AREA_OPACITY: f64 = 0.2;

/// The result's radar data, in axis order, with every value clamped into 0–100.
///
/// Out-of-range values are an upstream data problem; they are clamped (NaN
/// becomes 0) and logged instead of failing the whole result.
pub fn to_series(result: &AssessmentResult) -> Vec<RadarPoint> {
    result
        .radar_data
        .iter()
        .map(|point| RadarPoint {
            name: point.name.clone(),
            value: clamp_axis_value(&point.name, point.value),
        })
        .collect()
}

fn clamp_axis_value(axis: &str, value: f64) -> f64 {
    if value.is_nan() {
        warn!(axis, "radar value is NaN, using 0");
        return AXIS_MIN;
    }
    let clamped = value.clamp(AXIS_MIN, AXIS_MAX);
    if clamped != value {
        warn!(axis, value, clamped, "radar value out of range");
    }
    clamped
}

/// One spoke of the radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarIndicator {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

/// Styling bound to the caller's accent color. Not part of the data contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarStyle {
    pub line_color: String,

    /// The accent at 20% opacity when it is a hex color, otherwise the accent itself.
    pub area_color: String,

    pub symbol_size: u8,

    /// Number of concentric rings between `min` and `max`.
    pub split_number: u8,
}

impl RadarStyle {
    pub fn from_accent(accent: &str) -> Self {
        Self {
            line_color: accent.to_string(),
            area_color: translucent(accent, AREA_OPACITY).unwrap_or_else(|| accent.to_string()),
            symbol_size: SYMBOL_SIZE,
            split_number: SPLIT_NUMBER,
        }
    }
}

/// `#rrggbb` or `#rgb` as an `rgba(...)` string with the given opacity.
fn translucent(hex: &str, opacity: f64) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let (r, g, b) = match digits.len() {
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        3 => {
            let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
            (short(0)?, short(1)?, short(2)?)
        }
        _ => return None,
    };
    Some(format!("rgba({r}, {g}, {b}, {opacity})"))
}

/// Everything a spider-chart renderer needs to draw a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub indicators: Vec<RadarIndicator>,
    pub series: Vec<RadarPoint>,
    pub style: RadarStyle,
}

impl RadarChart {
    /// Project a result onto fixed 0–100 axes, styled with `accent`.
    pub fn project(result: &AssessmentResult, accent: &str) -> Self {
        let series = to_series(result);
        let indicators = series
            .iter()
            .map(|point| RadarIndicator {
                name: point.name.clone(),
                min: AXIS_MIN,
                max: AXIS_MAX,
            })
            .collect();
        Self {
            indicators,
            series,
            style: RadarStyle::from_accent(accent),
        }
    }

    /// Get the series values in axis order.
    pub fn values(&self) -> Vec<f64> {
        self.series.iter().map(|point| point.value).collect()
    }
}
