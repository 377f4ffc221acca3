use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::chart::ChartPoint;

/// Look-back window offered on the fund detail chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavWindow {
    OneMonth,
    SixMonths,
    OneYear,
    ThreeYears,
    FiveYears,
}

impl NavWindow {
    pub const ALL: [NavWindow; 5] = [
        NavWindow::OneMonth,
        NavWindow::SixMonths,
        NavWindow::OneYear,
        NavWindow::ThreeYears,
        NavWindow::FiveYears,
    ];

    pub fn months(self) -> u32 {
        match self {
            NavWindow::OneMonth => 1,
            NavWindow::SixMonths => 6,
            NavWindow::OneYear => 12,
            NavWindow::ThreeYears => 36,
            NavWindow::FiveYears => 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavWindow::OneMonth => "1M",
            NavWindow::SixMonths => "6M",
            NavWindow::OneYear => "1Y",
            NavWindow::ThreeYears => "3Y",
            NavWindow::FiveYears => "5Y",
        }
    }

    /// First date inside the window ending at `as_of`.
    pub fn start_date(self, as_of: NaiveDate) -> NaiveDate {
        as_of
            .checked_sub_months(Months::new(self.months()))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl std::fmt::Display for NavWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for NavWindow {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        NavWindow::ALL
            .into_iter()
            .find(|w| w.label() == upper)
            .ok_or_else(|| CoreError::invalid(format!("unknown NAV window '{s}'")))
    }
}

/// Slices NAV history into chart windows and derives window returns.
pub struct NavService;

impl NavService {
    pub fn new() -> Self {
        Self
    }

    /// Points dated on or after `window.start_date(as_of)`, in input order.
    pub fn filter_window(
        &self,
        points: &[ChartPoint],
        window: NavWindow,
        as_of: NaiveDate,
    ) -> Vec<ChartPoint> {
        let start = window.start_date(as_of);
        let kept: Vec<ChartPoint> = points.iter().filter(|p| p.date >= start).copied().collect();
        log::debug!(
            "NAV window {window} from {start}: kept {} of {} point(s)",
            kept.len(),
            points.len()
        );
        kept
    }

    /// Percentage change from the first to the last point.
    /// `None` with fewer than two points or a zero starting value.
    pub fn window_return(&self, points: &[ChartPoint]) -> Option<f64> {
        if points.len() < 2 {
            return None;
        }
        let first = points.first()?.value;
        let last = points.last()?.value;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

impl Default for NavService {
    fn default() -> Self {
        Self::new()
    }
}
