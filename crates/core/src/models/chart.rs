use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One NAV observation. Series are expected ascending by date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// One donut segment, ready for an SVG `<path d=...>`.
///
/// Angles are degrees clockwise from 12 o'clock and cumulative across the
/// allocation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutArc {
    pub label: String,
    pub percentage: u32,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    /// Sweep is larger than 180 degrees
    pub large_arc: bool,
    pub path_data: String,
    pub color_index: usize,
}

impl DonutArc {
    pub fn sweep_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }
}

/// A projected data point in view-box coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub date: NaiveDate,
}

/// Horizontal guide line with its value label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub value: f64,
}

/// Date label under the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub x: f64,
    pub date: NaiveDate,
    pub text: String,
}

/// Geometry for a NAV line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePath {
    pub points: Vec<LinePoint>,
    pub path_data: String,
    /// `path_data` closed down to the baseline, for the gradient fill
    pub area_path_data: String,
    pub grid_lines: Vec<GridLine>,
    pub axis_labels: Vec<AxisLabel>,
}

/// Coarse direction of a series: last value compared with the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn is_positive(self) -> bool {
        self == Trend::Up
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "Uptrend"),
            Trend::Down => write!(f, "Downtrend"),
        }
    }
}

/// Highest / lowest / latest value of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStats {
    pub highest: f64,
    pub lowest: f64,
    pub current: f64,
}
