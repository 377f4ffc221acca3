use chrono::NaiveDate;
use investment_portal_core::errors::CoreError;
use investment_portal_core::models::chart::{ChartPoint, Trend};
use investment_portal_core::models::fund::{FundQuery, FundSortKey};
use investment_portal_core::models::holding::HoldingRecord;
use investment_portal_core::models::portfolio::{palette_color, PALETTE, PALETTE_SIZE};
use investment_portal_core::models::settings::{LineGeometry, Settings};
use investment_portal_core::services::nav_service::NavWindow;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  HoldingRecord
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn list_key_joins_identity_fields() {
        let h = HoldingRecord::new("Axis Bluechip", 100.0, 120.0, Some("Equity"))
            .with_identity(Some("91012345"), Some("INF846K01DP8"), Some("AXBLUE"));
        assert_eq!(h.list_key(), "91012345:INF846K01DP8:AXBLUE");
    }

    #[test]
    fn list_key_skips_missing_parts() {
        let h = HoldingRecord::new("Axis Bluechip", 100.0, 120.0, None)
            .with_identity(Some("91012345"), None, Some("AXBLUE"));
        assert_eq!(h.list_key(), "91012345:AXBLUE");
    }

    #[test]
    fn list_key_falls_back_to_scheme_name() {
        let h = HoldingRecord::new("Axis Bluechip", 100.0, 120.0, None)
            .with_identity(Some("  "), None, None);
        assert_eq!(h.list_key(), "Axis Bluechip");
    }

    #[test]
    fn category_is_lowercased() {
        let h = HoldingRecord::new("X", 1.0, 1.0, Some("EQUITY"));
        assert_eq!(h.category(), "equity");
    }

    #[test]
    fn missing_or_blank_category_is_other() {
        assert_eq!(HoldingRecord::new("X", 1.0, 1.0, None).category(), "other");
        assert_eq!(HoldingRecord::new("X", 1.0, 1.0, Some("  ")).category(), "other");
    }

    #[test]
    fn zero_weight_needs_both_values_zero() {
        assert!(HoldingRecord::new("X", 0.0, 0.0, None).is_zero_weight());
        assert!(!HoldingRecord::new("X", 10.0, 0.0, None).is_zero_weight());
        assert!(!HoldingRecord::new("X", 0.0, 10.0, None).is_zero_weight());
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "schemeName": "HDFC Short Term Debt",
            "costValue": 50000,
            "currentMktValue": 45000.5,
            "assetType": "Debt",
            "isin": "INF179K01BB8"
        }"#;
        let h: HoldingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(h.scheme_name, "HDFC Short Term Debt");
        assert_eq!(h.cost_value, 50000.0);
        assert_eq!(h.current_mkt_value, 45000.5);
        assert_eq!(h.asset_type.as_deref(), Some("Debt"));
        assert_eq!(h.isin.as_deref(), Some("INF179K01BB8"));
        assert_eq!(h.folio, None);
        assert_eq!(h.gain_loss, 0.0);
    }

    #[test]
    fn serializes_camel_case_json() {
        let h = HoldingRecord::new("X", 1.0, 2.0, None);
        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains("\"schemeName\":\"X\""));
        assert!(json.contains("\"currentMktValue\":2.0"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Palette
// ═══════════════════════════════════════════════════════════════════

mod palette {
    use super::*;

    #[test]
    fn has_at_least_twelve_colors() {
        assert!(PALETTE_SIZE >= 12);
        assert_eq!(PALETTE.len(), PALETTE_SIZE);
    }

    #[test]
    fn colors_are_distinct() {
        let mut colors = PALETTE.to_vec();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), PALETTE_SIZE);
    }

    #[test]
    fn lookup_wraps_around() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(PALETTE_SIZE), PALETTE[0]);
        assert_eq!(palette_color(PALETTE_SIZE + 3), PALETTE[3]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NavWindow
// ═══════════════════════════════════════════════════════════════════

mod nav_window {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for w in NavWindow::ALL {
            assert_eq!(w.label().parse::<NavWindow>().unwrap(), w);
            assert_eq!(w.to_string(), w.label());
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("1y".parse::<NavWindow>().unwrap(), NavWindow::OneYear);
        assert_eq!(" 6m ".parse::<NavWindow>().unwrap(), NavWindow::SixMonths);
    }

    #[test]
    fn unknown_label_is_invalid_input() {
        let err = "2W".parse::<NavWindow>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn start_date_uses_calendar_months() {
        assert_eq!(NavWindow::OneMonth.start_date(d(2024, 3, 15)), d(2024, 2, 15));
        assert_eq!(NavWindow::OneYear.start_date(d(2024, 3, 15)), d(2023, 3, 15));
        assert_eq!(NavWindow::FiveYears.start_date(d(2024, 3, 15)), d(2019, 3, 15));
    }

    #[test]
    fn start_date_clamps_to_month_end() {
        // 31 March minus one month has no 31st
        assert_eq!(NavWindow::OneMonth.start_date(d(2024, 3, 31)), d(2024, 2, 29));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults_match_dashboard_layout() {
        let s = Settings::default();
        assert_eq!(s.donut.center_x, 120.0);
        assert_eq!(s.donut.center_y, 120.0);
        assert_eq!(s.donut.radius, 90.0);
        assert_eq!(s.line.width, 480.0);
        assert_eq!(s.line.height, 280.0);
        assert_eq!(s.line.padding, 40.0);
        assert_eq!(s.line.grid_levels, 4);
        assert_eq!(s.suggested_fund_count, 6);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_keys_with_defaults() {
        let s = Settings::from_json(r#"{ "suggested_fund_count": 9 }"#).unwrap();
        assert_eq!(s.suggested_fund_count, 9);
        assert_eq!(s.donut, Settings::default().donut);
        assert_eq!(s.endpoints, Settings::default().endpoints);
    }

    #[test]
    fn from_json_rejects_zero_radius() {
        let json = r#"{ "donut": { "center_x": 100, "center_y": 100, "radius": 0 } }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn from_json_rejects_padding_wider_than_view() {
        let json = r#"{ "line": { "width": 60, "height": 280, "padding": 40, "grid_levels": 4 } }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn from_json_rejects_empty_endpoint() {
        let json = r#"{ "endpoints": {
            "fund_catalog_url": "",
            "scheme_detail_url": "https://example.test/detail",
            "nav_history_url": "https://example.test/nav"
        } }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(err.to_string().contains("fund_catalog_url"));
    }

    #[test]
    fn from_json_bad_syntax_is_deserialization_error() {
        let err = Settings::from_json("{").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn line_geometry_needs_a_grid_level() {
        let g = LineGeometry {
            grid_levels: 0,
            ..LineGeometry::default()
        };
        assert!(matches!(g.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn line_geometry_rejects_non_finite() {
        let g = LineGeometry {
            width: f64::NAN,
            ..LineGeometry::default()
        };
        assert!(g.validate().is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FundQuery / Trend / ChartPoint
// ═══════════════════════════════════════════════════════════════════

mod misc {
    use super::*;

    #[test]
    fn default_query_is_unfiltered() {
        assert!(FundQuery::default().is_unfiltered());
        assert_eq!(FundQuery::default().sort_by, FundSortKey::Catalog);
    }

    #[test]
    fn all_type_and_blank_search_are_unfiltered() {
        let q = FundQuery {
            scheme_type: Some("ALL".into()),
            search: Some("   ".into()),
            sort_by: FundSortKey::Nav,
        };
        assert!(q.is_unfiltered());
    }

    #[test]
    fn type_or_search_makes_query_filtered() {
        let by_type = FundQuery {
            scheme_type: Some("EQUITY".into()),
            ..FundQuery::default()
        };
        let by_search = FundQuery {
            search: Some("axis".into()),
            ..FundQuery::default()
        };
        assert!(!by_type.is_unfiltered());
        assert!(!by_search.is_unfiltered());
    }

    #[test]
    fn trend_display_and_direction() {
        assert_eq!(Trend::Up.to_string(), "Uptrend");
        assert_eq!(Trend::Down.to_string(), "Downtrend");
        assert!(Trend::Up.is_positive());
        assert!(!Trend::Down.is_positive());
    }

    #[test]
    fn chart_point_serializes_iso_date() {
        let p = ChartPoint::new(d(2024, 1, 1), 10.5);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-01","value":10.5}"#);
    }
}
