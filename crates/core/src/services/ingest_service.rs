use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::models::chart::ChartPoint;
use crate::models::fund::{FundDetail, FundListing};
use crate::models::holding::HoldingRecord;

/// Validation boundary between raw API JSON and the typed core.
///
/// The upstream APIs send numbers either as JSON numbers or as numeric
/// strings, and leave fields out freely. Everything is checked here once:
/// missing magnitudes become 0, anything unparseable, non-finite or negative
/// becomes `CoreError::InvalidInput` instead of a silent zero.
pub struct IngestService;

impl IngestService {
    pub fn new() -> Self {
        Self
    }

    /// Flatten `full_response.data[*].schemes` of a portfolio response.
    ///
    /// Expected shape:
    /// `{ success, pan, full_response: { data: [ { schemes: [...] } ], portfolio: [...] } }`
    pub fn parse_portfolio_response(&self, json: &str) -> Result<Vec<HoldingRecord>, CoreError> {
        let root: Value = serde_json::from_str(json)?;

        if root.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(CoreError::invalid("portfolio response reports success = false"));
        }

        let data = root
            .get("full_response")
            .and_then(|r| r.get("data"))
            .ok_or_else(|| CoreError::invalid("portfolio response has no full_response.data"))?;
        let data = data
            .as_array()
            .ok_or_else(|| CoreError::invalid("full_response.data is not a list"))?;

        let mut holdings = Vec::new();
        for (i, entry) in data.iter().enumerate() {
            let schemes = match entry.get("schemes") {
                None | Some(Value::Null) => continue,
                Some(Value::Array(schemes)) => schemes,
                Some(_) => {
                    return Err(CoreError::invalid(format!(
                        "full_response.data[{i}].schemes is not a list"
                    )))
                }
            };
            for scheme in schemes {
                holdings.push(Self::parse_scheme(scheme)?);
            }
        }
        Ok(holdings)
    }

    /// Parse `{ results: [ { nav_date, nav_value } ] }` into points sorted
    /// ascending by date. Same-day duplicates are kept in their original order.
    pub fn parse_nav_history(&self, json: &str) -> Result<Vec<ChartPoint>, CoreError> {
        let root: Value = serde_json::from_str(json)?;
        let results = match root.get("results") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(results)) => results,
            Some(_) => return Err(CoreError::invalid("NAV history results is not a list")),
        };

        let mut points = results
            .iter()
            .map(|item| {
                let obj = Self::as_object(item, "NAV history entry")?;
                let date = Self::date_field(obj, "nav_date")?
                    .ok_or_else(|| CoreError::invalid("NAV history entry has no nav_date"))?;
                let value = Self::magnitude(obj, "nav_value")?;
                Ok(ChartPoint::new(date, value))
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        points.sort_by_key(|p| p.date);
        Ok(points)
    }

    /// Parse the fund catalog `{ data: [ ... ] }`.
    ///
    /// NAV and minimum investment follow the magnitude rules (missing or null
    /// is 0, negative is rejected). Returns may be negative; null means unknown.
    pub fn parse_fund_catalog(&self, json: &str) -> Result<Vec<FundListing>, CoreError> {
        let root: Value = serde_json::from_str(json)?;
        let data = root
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| CoreError::invalid("fund catalog data is not a list"))?;

        data.iter().map(Self::parse_listing).collect()
    }

    /// Parse a scheme detail response. Sections the API omits leave fields `None`.
    pub fn parse_fund_detail(&self, json: &str) -> Result<FundDetail, CoreError> {
        let root: Value = serde_json::from_str(json)?;
        let data = root
            .get("data")
            .and_then(Value::as_object)
            .ok_or_else(|| CoreError::invalid("scheme detail response has no data object"))?;

        let empty = Map::new();
        let basic = Self::section(data, "basic_info", &empty);
        let perf = Self::section(data, "risk_and_performance", &empty);
        let invest = Self::section(data, "investment_details", &empty);
        let dates = Self::section(data, "dates_and_status", &empty);

        Ok(FundDetail {
            name: Self::string_field(basic, "scheme_name"),
            scheme_type: Self::string_field(basic, "scheme_type"),
            category: Self::string_field(basic, "category"),
            current_nav: Self::optional_number(perf, "current_nav")?,
            return_1y: Self::optional_number(perf, "nav_1year_return")?,
            return_3y: Self::optional_number(perf, "nav_3year_return")?,
            return_5y: Self::optional_number(perf, "nav_5year_return")?,
            risk_level: Self::string_field(perf, "current_risk"),
            min_sip_amount: Self::optional_number(invest, "min_sip_amount")?,
            fund_manager: Self::string_field(invest, "fund_manager"),
            fund_type: Self::string_field(basic, "fund_type"),
            plan_type: Self::string_field(basic, "scheme_plan"),
            start_date: Self::date_field(dates, "start_date")?,
        })
    }

    // ── Internal ────────────────────────────────────────────────────

    fn parse_scheme(value: &Value) -> Result<HoldingRecord, CoreError> {
        let obj = Self::as_object(value, "scheme")?;
        let scheme_name = Self::string_field(obj, "schemeName").unwrap_or_default();

        let cost_value = Self::magnitude(obj, "costValue")
            .map_err(|e| Self::with_scheme(e, &scheme_name))?;
        let current_mkt_value = Self::magnitude(obj, "currentMktValue")
            .map_err(|e| Self::with_scheme(e, &scheme_name))?;

        Ok(HoldingRecord {
            gain_loss: Self::optional_number(obj, "gainLoss")?.unwrap_or(0.0),
            gain_loss_percentage: Self::optional_number(obj, "gainLossPercentage")?
                .unwrap_or(0.0),
            asset_type: Self::string_field(obj, "assetType"),
            isin: Self::string_field(obj, "isin"),
            folio: Self::string_field(obj, "folio"),
            scheme_code: Self::string_field(obj, "schemeCode"),
            amc: Self::string_field(obj, "amc"),
            amc_name: Self::string_field(obj, "amcName"),
            nav: Self::optional_number(obj, "nav")?,
            nav_date: Self::string_field(obj, "navDate"),
            scheme_name,
            cost_value,
            current_mkt_value,
        })
    }

    fn parse_listing(value: &Value) -> Result<FundListing, CoreError> {
        let obj = Self::as_object(value, "fund catalog entry")?;
        let scheme_name = Self::string_field(obj, "scheme_name").unwrap_or_default();
        let number = |key: &str| {
            Self::optional_number(obj, key).map_err(|e| Self::with_scheme(e, &scheme_name))
        };
        let magnitude =
            |key: &str| Self::magnitude(obj, key).map_err(|e| Self::with_scheme(e, &scheme_name));
        let text = |key: &str| Self::string_field(obj, key).unwrap_or_default();

        Ok(FundListing {
            id: text("_id"),
            scheme_type: text("scheme_type"),
            category: text("category"),
            nav_value: magnitude("nav_value")?,
            nav_1year_return: number("nav_1year_return")?,
            nav_3year_return: number("nav_3year_return")?,
            nav_5year_return: number("nav_5year_return")?,
            min_investment: magnitude("min_investment")?,
            scheme_code: text("scheme_code"),
            isin: text("isin"),
            amc_code: text("amc_code"),
            fund_type: text("fund_type"),
            scheme_plan: text("scheme_plan"),
            settlement_type: text("settlement_type"),
            scheme_name,
        })
    }

    fn section<'a>(
        data: &'a Map<String, Value>,
        name: &str,
        empty: &'a Map<String, Value>,
    ) -> &'a Map<String, Value> {
        data.get(name).and_then(Value::as_object).unwrap_or(empty)
    }

    fn with_scheme(err: CoreError, scheme_name: &str) -> CoreError {
        match err {
            CoreError::InvalidInput(msg) => {
                CoreError::InvalidInput(format!("scheme '{scheme_name}': {msg}"))
            }
            other => other,
        }
    }

    fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, CoreError> {
        value
            .as_object()
            .ok_or_else(|| CoreError::invalid(format!("{what} is not an object")))
    }

    /// A non-negative finite number; missing or null counts as 0.
    fn magnitude(obj: &Map<String, Value>, key: &str) -> Result<f64, CoreError> {
        let value = Self::optional_number(obj, key)?.unwrap_or(0.0);
        if value < 0.0 {
            return Err(CoreError::invalid(format!("{key} is negative ({value})")));
        }
        Ok(value)
    }

    /// A finite number given as a JSON number or numeric string.
    fn optional_number(obj: &Map<String, Value>, key: &str) -> Result<Option<f64>, CoreError> {
        let parsed = match obj.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };
        match parsed {
            Some(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(CoreError::invalid(format!(
                "{key} is not a finite number: {}",
                obj.get(key).map(Value::to_string).unwrap_or_default()
            ))),
        }
    }

    fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
        match obj.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// ISO date, optionally followed by a time part (`2024-01-15T00:00:00Z`).
    fn date_field(obj: &Map<String, Value>, key: &str) -> Result<Option<NaiveDate>, CoreError> {
        let Some(raw) = Self::string_field(obj, key) else {
            return Ok(None);
        };
        let date_part = raw.get(..10).unwrap_or(raw.as_str());
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| CoreError::invalid(format!("{key} '{raw}' is not an ISO date: {e}")))
    }
}

impl Default for IngestService {
    fn default() -> Self {
        Self::new()
    }
}
