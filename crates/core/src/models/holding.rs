use serde::{Deserialize, Serialize};

/// One scheme/folio position as reported by the portfolio API.
///
/// `scheme_name` is the display key but is not unique: the same scheme can
/// be held in several folios. `gain_loss` and `gain_loss_percentage` are
/// carried for display only; the aggregator always recomputes them from
/// cost and market value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    pub scheme_name: String,

    /// Amount invested, must be >= 0
    pub cost_value: f64,

    /// Current market value, must be >= 0
    pub current_mkt_value: f64,

    #[serde(default)]
    pub gain_loss: f64,

    #[serde(default)]
    pub gain_loss_percentage: f64,

    /// Free-text category ("Equity", "DEBT", ...). Lower-cased for grouping.
    #[serde(default)]
    pub asset_type: Option<String>,

    #[serde(default)]
    pub isin: Option<String>,

    #[serde(default)]
    pub folio: Option<String>,

    #[serde(default)]
    pub scheme_code: Option<String>,

    #[serde(default)]
    pub amc: Option<String>,

    #[serde(default)]
    pub amc_name: Option<String>,

    #[serde(default)]
    pub nav: Option<f64>,

    #[serde(default)]
    pub nav_date: Option<String>,
}

impl HoldingRecord {
    /// Minimal holding with just the fields the aggregator reads.
    pub fn new(
        scheme_name: impl Into<String>,
        cost_value: f64,
        current_mkt_value: f64,
        asset_type: Option<&str>,
    ) -> Self {
        Self {
            scheme_name: scheme_name.into(),
            cost_value,
            current_mkt_value,
            gain_loss: current_mkt_value - cost_value,
            gain_loss_percentage: 0.0,
            asset_type: asset_type.map(str::to_string),
            isin: None,
            folio: None,
            scheme_code: None,
            amc: None,
            amc_name: None,
            nav: None,
            nav_date: None,
        }
    }

    /// Builder-style setter for the identity fields.
    pub fn with_identity(
        mut self,
        folio: Option<&str>,
        isin: Option<&str>,
        scheme_code: Option<&str>,
    ) -> Self {
        self.folio = folio.map(str::to_string);
        self.isin = isin.map(str::to_string);
        self.scheme_code = scheme_code.map(str::to_string);
        self
    }

    /// Stable key for UI lists: `folio:isin:scheme_code`, skipping missing parts.
    /// Falls back to the scheme name when no identity field is present.
    pub fn list_key(&self) -> String {
        let parts: Vec<&str> = [&self.folio, &self.isin, &self.scheme_code]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.trim().is_empty())
            .collect();

        if parts.is_empty() {
            self.scheme_name.clone()
        } else {
            parts.join(":")
        }
    }

    /// Holdings with neither cost nor market value carry no weight.
    pub fn is_zero_weight(&self) -> bool {
        self.cost_value == 0.0 && self.current_mkt_value == 0.0
    }

    /// Normalized category: lower-cased asset type, `"other"` when missing or blank.
    pub fn category(&self) -> String {
        match self.asset_type.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => "other".to_string(),
        }
    }
}

/// Recomputed gain figures for one holding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldingGain {
    pub gain_loss: f64,

    /// 0 when the holding has no cost basis
    pub gain_loss_percentage: f64,
}
