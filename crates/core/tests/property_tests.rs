//! Property-based tests for the aggregation and chart projection invariants.
//!
//! These tests verify that universal properties hold across generated
//! holdings lists and NAV series, using the `proptest` crate.

use chrono::NaiveDate;
use proptest::prelude::*;

use investment_portal_core::models::chart::ChartPoint;
use investment_portal_core::models::holding::HoldingRecord;
use investment_portal_core::models::settings::LineGeometry;
use investment_portal_core::services::aggregation_service::PortfolioAggregator;
use investment_portal_core::services::chart_service::ChartProjector;

// ═══════════════════════════════════════════════════════════════════
// Generators
// ═══════════════════════════════════════════════════════════════════

/// A holding with a non-negative cost and market value; zeros are common
/// enough to exercise the exclusion rule.
fn arb_holding() -> impl Strategy<Value = HoldingRecord> {
    (
        "[A-Z][a-z]{3,12}",
        prop_oneof![Just(0.0f64), 0.0f64..1_000_000.0],
        prop_oneof![Just(0.0f64), 0.0f64..1_000_000.0],
        proptest::option::of(prop_oneof![
            Just("Equity"),
            Just("debt"),
            Just("HYBRID"),
            Just("commodity"),
        ]),
    )
        .prop_map(|(name, cost, mkt, asset_type)| HoldingRecord::new(name, cost, mkt, asset_type))
}

fn arb_series() -> impl Strategy<Value = Vec<ChartPoint>> {
    proptest::collection::vec(0.0f64..10_000.0, 1..60).prop_map(|values| {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| ChartPoint::new(start + chrono::Days::new(i as u64), v))
            .collect()
    })
}

// ═══════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Per-entry rounding keeps the total within n - 1 of 100.
    #[test]
    fn percentages_sum_within_rounding_slack(holdings in proptest::collection::vec(arb_holding(), 0..30)) {
        let snapshot = PortfolioAggregator::new().normalize(&holdings).unwrap();
        let n = snapshot.allocations.len() as i64;
        let sum: i64 = snapshot.allocations.iter().map(|a| i64::from(a.percentage)).sum();

        if snapshot.summary.current_value > 0.0 {
            prop_assert!(n >= 1);
            prop_assert!((sum - 100).abs() <= (n - 1).max(0), "sum {} for {} entries", sum, n);
            if n == 1 {
                prop_assert_eq!(sum, 100);
            }
        } else {
            prop_assert_eq!(sum, 0);
        }
    }

    /// No NaN or infinity ever reaches the summary.
    #[test]
    fn summary_is_always_finite(holdings in proptest::collection::vec(arb_holding(), 0..30)) {
        let s = PortfolioAggregator::new().normalize(&holdings).unwrap().summary;
        prop_assert!(s.total_investment.is_finite());
        prop_assert!(s.current_value.is_finite());
        prop_assert!(s.total_gain_loss.is_finite());
        prop_assert!(s.gain_loss_percentage.is_finite());
        if s.total_investment == 0.0 {
            prop_assert_eq!(s.gain_loss_percentage, 0.0);
        }
    }

    /// Zero-weight holdings never show up as allocations.
    #[test]
    fn zero_weight_holdings_are_excluded(holdings in proptest::collection::vec(arb_holding(), 0..30)) {
        let snapshot = PortfolioAggregator::new().normalize(&holdings).unwrap();
        let expected = holdings.iter().filter(|h| !h.is_zero_weight()).count();
        prop_assert_eq!(snapshot.allocations.len(), expected);
    }

    /// Donut arcs are contiguous and follow allocation order.
    #[test]
    fn donut_arcs_are_contiguous(holdings in proptest::collection::vec(arb_holding(), 0..20)) {
        let snapshot = PortfolioAggregator::new().normalize(&holdings).unwrap();
        let arcs = ChartProjector::default().donut(&snapshot.allocations);
        prop_assert_eq!(arcs.len(), snapshot.allocations.len());

        let mut expected_start = 0.0;
        for (arc, entry) in arcs.iter().zip(&snapshot.allocations) {
            prop_assert!((arc.start_angle_deg - expected_start).abs() < 1e-9);
            prop_assert_eq!(&arc.label, &entry.label);
            prop_assert_eq!(arc.large_arc, f64::from(arc.percentage) / 100.0 * 360.0 > 180.0);
            expected_start = arc.end_angle_deg;
        }
    }

    /// Every projected point lies inside the padded view box, left to right.
    #[test]
    fn line_points_stay_inside_view(points in arb_series()) {
        let view = LineGeometry::default();
        let path = ChartProjector::default().line(&points, &view).unwrap().unwrap();

        prop_assert_eq!(path.points.len(), points.len());
        for p in &path.points {
            prop_assert!(p.x.is_finite() && p.y.is_finite());
            prop_assert!(p.x >= view.padding - 1e-9 && p.x <= view.width - view.padding + 1e-9);
            prop_assert!(p.y >= view.padding - 1e-9 && p.y <= view.height - view.padding + 1e-9);
        }
        for pair in path.points.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }
}
