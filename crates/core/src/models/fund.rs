use serde::{Deserialize, Serialize};

/// A fund from the discovery catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundListing {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub scheme_name: String,
    #[serde(default)]
    pub scheme_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub nav_value: f64,
    #[serde(default)]
    pub nav_1year_return: Option<f64>,
    #[serde(default)]
    pub nav_3year_return: Option<f64>,
    #[serde(default)]
    pub nav_5year_return: Option<f64>,
    #[serde(default)]
    pub min_investment: f64,
    #[serde(default)]
    pub scheme_code: String,
    #[serde(default)]
    pub isin: String,
    #[serde(default)]
    pub amc_code: String,
    #[serde(default)]
    pub fund_type: String,
    #[serde(default)]
    pub scheme_plan: String,
    #[serde(default)]
    pub settlement_type: String,
}

/// Sort order for the discovery list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FundSortKey {
    /// Catalog order, unchanged
    #[default]
    Catalog,
    /// Highest 1-year return first
    Returns1Y,
    Returns3Y,
    Returns5Y,
    /// Highest NAV first
    Nav,
    /// Lowest minimum investment first
    MinInvestment,
    /// Alphabetical by scheme name
    Name,
}

/// Filter/search/sort options for the discovery list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FundQuery {
    /// Scheme type ("EQUITY", "DEBT", ...). `None` or "all" matches everything.
    pub scheme_type: Option<String>,
    pub search: Option<String>,
    pub sort_by: FundSortKey,
}

impl FundQuery {
    /// True when neither a type filter nor a search term is active.
    pub fn is_unfiltered(&self) -> bool {
        let no_type = self
            .scheme_type
            .as_deref()
            .map(|t| t.trim().is_empty() || t.eq_ignore_ascii_case("all"))
            .unwrap_or(true);
        let no_search = self
            .search
            .as_deref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(true);
        no_type && no_search
    }
}

/// Scheme detail page data. Anything the API leaves out stays `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FundDetail {
    pub name: Option<String>,
    pub scheme_type: Option<String>,
    pub category: Option<String>,
    pub current_nav: Option<f64>,
    pub return_1y: Option<f64>,
    pub return_3y: Option<f64>,
    pub return_5y: Option<f64>,
    pub risk_level: Option<String>,
    pub min_sip_amount: Option<f64>,
    pub fund_manager: Option<String>,
    pub fund_type: Option<String>,
    pub plan_type: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
}
