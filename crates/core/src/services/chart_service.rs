use std::f64::consts::PI;

use crate::errors::CoreError;
use crate::models::chart::{
    AxisLabel, ChartPoint, ChartStats, DonutArc, GridLine, LinePath, LinePoint, Trend,
};
use crate::models::portfolio::AllocationEntry;
use crate::models::settings::{DonutGeometry, LineGeometry};

/// Generates chart-ready geometry from portfolio and NAV data.
///
/// The core computes every coordinate; the frontend only renders.
/// - Donut arcs from an allocation list
/// - Line/area paths, grid lines and axis labels from a NAV series
#[derive(Debug)]
pub struct ChartProjector {
    donut: DonutGeometry,
}

impl ChartProjector {
    /// Fails with `InvalidInput` unless the radius is positive and the
    /// center finite.
    pub fn new(donut: DonutGeometry) -> Result<Self, CoreError> {
        donut.validate()?;
        Ok(Self { donut })
    }

    pub fn donut_geometry(&self) -> DonutGeometry {
        self.donut
    }

    /// Project allocations onto donut arcs, in list order.
    ///
    /// Angles accumulate from 0 (12 o'clock) clockwise. A 360° sweep cannot be
    /// drawn by one SVG arc command because its endpoints coincide, so it is
    /// emitted as two half arcs through the opposite point.
    pub fn donut(&self, allocations: &[AllocationEntry]) -> Vec<DonutArc> {
        let mut cumulative = 0.0;

        allocations
            .iter()
            .map(|entry| {
                let sweep = f64::from(entry.percentage) / 100.0 * 360.0;
                let start = cumulative;
                let end = cumulative + sweep;
                cumulative = end;

                let large_arc = sweep > 180.0;
                let path_data = if sweep >= 360.0 {
                    self.full_circle_path(start)
                } else {
                    self.arc_path(start, end, large_arc)
                };

                DonutArc {
                    label: entry.label.clone(),
                    percentage: entry.percentage,
                    start_angle_deg: start,
                    end_angle_deg: end,
                    large_arc,
                    path_data,
                    color_index: entry.color_index,
                }
            })
            .collect()
    }

    /// Project a NAV series into the view box described by `view`.
    ///
    /// Returns `Ok(None)` for an empty series. Values must be finite and >= 0.
    /// A flat series (max == min) is scaled with a range of 1 and lies on the
    /// baseline.
    pub fn line(
        &self,
        points: &[ChartPoint],
        view: &LineGeometry,
    ) -> Result<Option<LinePath>, CoreError> {
        if points.is_empty() {
            return Ok(None);
        }
        view.validate()?;
        for p in points {
            if !p.value.is_finite() || p.value < 0.0 {
                return Err(CoreError::invalid(format!(
                    "NAV value on {} must be a finite number >= 0, got {}",
                    p.date, p.value
                )));
            }
        }

        let min_value = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let max_value = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
        let range = if max_value - min_value == 0.0 {
            1.0
        } else {
            max_value - min_value
        };

        let padding = view.padding;
        let chart_width = view.width - 2.0 * padding;
        let chart_height = view.height - 2.0 * padding;
        let baseline = view.height - padding;
        let n = points.len();

        let projected: Vec<LinePoint> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = if n == 1 {
                    padding
                } else {
                    i as f64 / (n - 1) as f64 * chart_width + padding
                };
                let y = baseline - (p.value - min_value) / range * chart_height;
                LinePoint {
                    x,
                    y,
                    value: p.value,
                    date: p.date,
                }
            })
            .collect();

        let path_data = projected
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{cmd} {} {}", fmt_coord(p.x), fmt_coord(p.y))
            })
            .collect::<Vec<_>>()
            .join(" ");

        // projected is non-empty here
        let first_x = projected[0].x;
        let last_x = projected[n - 1].x;
        let area_path_data = format!(
            "{path_data} L {} {} L {} {} Z",
            fmt_coord(last_x),
            fmt_coord(baseline),
            fmt_coord(first_x),
            fmt_coord(baseline),
        );

        let levels = f64::from(view.grid_levels);
        let grid_lines = (0..=view.grid_levels)
            .map(|i| {
                let fraction = f64::from(i) / levels;
                GridLine {
                    y: baseline - fraction * chart_height,
                    value: min_value + fraction * range,
                }
            })
            .collect();

        let axis_labels = Self::axis_label_indices(n)
            .into_iter()
            .map(|i| AxisLabel {
                x: projected[i].x,
                date: projected[i].date,
                text: projected[i].date.format("%b %-d").to_string(),
            })
            .collect();

        Ok(Some(LinePath {
            points: projected,
            path_data,
            area_path_data,
            grid_lines,
            axis_labels,
        }))
    }

    /// Up when the last value is strictly above the first, otherwise Down.
    /// An empty series counts as Down.
    pub fn trend(&self, points: &[ChartPoint]) -> Trend {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if last.value > first.value => Trend::Up,
            _ => Trend::Down,
        }
    }

    pub fn stats(&self, points: &[ChartPoint]) -> Option<ChartStats> {
        let last = points.last()?;
        Some(ChartStats {
            highest: points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max),
            lowest: points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min),
            current: last.value,
        })
    }

    // ── Internal ────────────────────────────────────────────────────

    fn polar(&self, angle_deg: f64) -> (f64, f64) {
        // -90° so that 0° points at 12 o'clock
        let rad = (angle_deg - 90.0) * PI / 180.0;
        (
            self.donut.center_x + self.donut.radius * rad.cos(),
            self.donut.center_y + self.donut.radius * rad.sin(),
        )
    }

    fn arc_path(&self, start: f64, end: f64, large_arc: bool) -> String {
        let (sx, sy) = self.polar(start);
        let (ex, ey) = self.polar(end);
        let r = fmt_coord(self.donut.radius);
        format!(
            "M {} {} A {r} {r} 0 {} 1 {} {}",
            fmt_coord(sx),
            fmt_coord(sy),
            u8::from(large_arc),
            fmt_coord(ex),
            fmt_coord(ey),
        )
    }

    fn full_circle_path(&self, start: f64) -> String {
        let (sx, sy) = self.polar(start);
        let (mx, my) = self.polar(start + 180.0);
        let r = fmt_coord(self.donut.radius);
        format!(
            "M {sx} {sy} A {r} {r} 0 0 1 {mx} {my} A {r} {r} 0 0 1 {sx} {sy}",
            sx = fmt_coord(sx),
            sy = fmt_coord(sy),
            mx = fmt_coord(mx),
            my = fmt_coord(my),
        )
    }

    /// First, middle and last index, without repeats.
    fn axis_label_indices(n: usize) -> Vec<usize> {
        let mut indices = vec![0, n / 2, n - 1];
        indices.dedup();
        indices
    }
}

impl Default for ChartProjector {
    fn default() -> Self {
        Self {
            donut: DonutGeometry::default(),
        }
    }
}

/// Two decimals, trailing zeros trimmed, `-0` printed as `0`.
pub(crate) fn fmt_coord(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}
