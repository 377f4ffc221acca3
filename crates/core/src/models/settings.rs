use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Center and radius of the allocation donut, in view-box units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self {
            center_x: 120.0,
            center_y: 120.0,
            radius: 90.0,
        }
    }
}

impl DonutGeometry {
    pub fn validate(&self) -> Result<(), CoreError> {
        let finite = [self.center_x, self.center_y, self.radius]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.radius <= 0.0 {
            return Err(CoreError::invalid(format!(
                "donut geometry needs a finite center and a positive radius, got {self:?}"
            )));
        }
        Ok(())
    }
}

/// View box and grid density of the NAV line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Number of intervals between grid lines; `grid_levels + 1` lines are drawn.
    pub grid_levels: u32,
}

impl Default for LineGeometry {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 280.0,
            padding: 40.0,
            grid_levels: 4,
        }
    }
}

impl LineGeometry {
    pub fn validate(&self) -> Result<(), CoreError> {
        let dims = [self.width, self.height, self.padding];
        if dims.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::invalid("line chart dimensions must be finite"));
        }
        if self.padding < 0.0 {
            return Err(CoreError::invalid("line chart padding must be >= 0"));
        }
        if self.width <= 2.0 * self.padding || self.height <= 2.0 * self.padding {
            return Err(CoreError::invalid(format!(
                "line chart view {}x{} leaves no room inside padding {}",
                self.width, self.height, self.padding
            )));
        }
        if self.grid_levels == 0 {
            return Err(CoreError::invalid("grid_levels must be at least 1"));
        }
        Ok(())
    }
}

/// Base URLs of the external APIs the providers talk to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Fund catalog list (`GET {fund_catalog_url}`)
    pub fund_catalog_url: String,
    /// Scheme detail (`GET {scheme_detail_url}/{isin}`)
    pub scheme_detail_url: String,
    /// NAV history (`GET {nav_history_url}?isin={isin}`)
    pub nav_history_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            fund_catalog_url: "https://pl.pr.flashfund.in/Wyable/mutual-funds".to_string(),
            scheme_detail_url: "https://pl.pr.flashfund.in/schemedetails/scheme/detail".to_string(),
            nav_history_url: "https://vyable-be.onrender.com/scheme/nav-history/".to_string(),
        }
    }
}

/// Library configuration. Every field has a default, so partial JSON is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub donut: DonutGeometry,
    pub line: LineGeometry,
    pub endpoints: Endpoints,

    /// How many funds the discovery list shows when no filter is active.
    pub suggested_fund_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            donut: DonutGeometry::default(),
            line: LineGeometry::default(),
            endpoints: Endpoints::default(),
            suggested_fund_count: 6,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.donut
            .validate()
            .map_err(|e| CoreError::Config(e.to_string()))?;
        self.line
            .validate()
            .map_err(|e| CoreError::Config(e.to_string()))?;

        let e = &self.endpoints;
        for (name, url) in [
            ("fund_catalog_url", &e.fund_catalog_url),
            ("scheme_detail_url", &e.scheme_detail_url),
            ("nav_history_url", &e.nav_history_url),
        ] {
            if url.trim().is_empty() {
                return Err(CoreError::Config(format!("endpoint {name} is empty")));
            }
        }
        Ok(())
    }
}
