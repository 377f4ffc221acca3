pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use errors::CoreError;
use models::{
    chart::{ChartPoint, ChartStats, DonutArc, LinePath, Trend},
    fund::{FundDetail, FundListing, FundQuery},
    holding::HoldingRecord,
    portfolio::{CategoryBreakdown, CategoryTotal, PortfolioSnapshot},
    settings::Settings,
};
use providers::{
    flashfund::FlashfundProvider,
    nav_history::NavHistoryApiProvider,
    traits::{FundCatalogProvider, FundDetailProvider, NavHistoryProvider},
};
use services::{
    aggregation_service::PortfolioAggregator, chart_service::ChartProjector,
    discovery_service::DiscoveryService, ingest_service::IngestService,
    nav_service::{NavService, NavWindow},
};

/// Everything the dashboard renders for one holdings fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub snapshot: PortfolioSnapshot,
    pub arcs: Vec<DonutArc>,
    pub categories: Vec<CategoryTotal>,
    pub breakdown: CategoryBreakdown,
}

/// Everything the fund detail page renders for one NAV window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundChart {
    pub window: NavWindow,
    pub line: LinePath,
    pub trend: Trend,
    pub stats: ChartStats,
    /// Percentage change over the window; `None` with fewer than two points
    pub window_return: Option<f64>,
}

/// Main entry point for the investment-portal core library.
///
/// Holds configuration, the pure services and the API providers. It keeps no
/// portfolio state between calls: callers fetch data and pass it in, and each
/// call returns a complete, freshly computed view.
#[must_use]
pub struct InvestmentPortal {
    settings: Settings,
    aggregator: PortfolioAggregator,
    projector: ChartProjector,
    nav_service: NavService,
    discovery: DiscoveryService,
    ingest: IngestService,
    catalog_provider: Box<dyn FundCatalogProvider>,
    detail_provider: Box<dyn FundDetailProvider>,
    nav_provider: Box<dyn NavHistoryProvider>,
}

impl std::fmt::Debug for InvestmentPortal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestmentPortal")
            .field("settings", &self.settings)
            .field("catalog_provider", &self.catalog_provider.name())
            .field("detail_provider", &self.detail_provider.name())
            .field("nav_provider", &self.nav_provider.name())
            .finish()
    }
}

impl InvestmentPortal {
    /// Build with the default HTTP providers pointed at `settings.endpoints`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let flashfund_catalog = FlashfundProvider::new(&settings.endpoints);
        let flashfund_detail = FlashfundProvider::new(&settings.endpoints);
        let nav = NavHistoryApiProvider::new(&settings.endpoints);
        Self::with_providers(
            settings,
            Box::new(flashfund_catalog),
            Box::new(flashfund_detail),
            Box::new(nav),
        )
    }

    /// Build with caller-supplied providers (tests, offline fixtures, other APIs).
    pub fn with_providers(
        settings: Settings,
        catalog_provider: Box<dyn FundCatalogProvider>,
        detail_provider: Box<dyn FundDetailProvider>,
        nav_provider: Box<dyn NavHistoryProvider>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self {
            aggregator: PortfolioAggregator::new(),
            projector: ChartProjector::new(settings.donut)?,
            nav_service: NavService::new(),
            discovery: DiscoveryService::new(settings.suggested_fund_count),
            ingest: IngestService::new(),
            settings,
            catalog_provider,
            detail_provider,
            nav_provider,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Summary, allocations, donut arcs and category roll-ups from one holdings list.
    pub fn dashboard(&self, holdings: &[HoldingRecord]) -> Result<DashboardView, CoreError> {
        let snapshot = self.aggregator.normalize(holdings)?;
        let arcs = self.projector.donut(&snapshot.allocations);
        let categories = self.aggregator.category_totals(&snapshot.allocations);
        let breakdown = self.aggregator.category_breakdown(&snapshot.allocations);
        Ok(DashboardView {
            snapshot,
            arcs,
            categories,
            breakdown,
        })
    }

    /// Same as `dashboard`, starting from a raw portfolio API response body.
    pub fn dashboard_from_json(&self, json: &str) -> Result<DashboardView, CoreError> {
        let holdings = self.ingest.parse_portfolio_response(json)?;
        self.dashboard(&holdings)
    }

    // ── Fund detail ─────────────────────────────────────────────────

    /// Line chart for the part of `history` inside `window` ending at `as_of`.
    /// `Ok(None)` when the window holds no points.
    pub fn fund_chart(
        &self,
        history: &[ChartPoint],
        window: NavWindow,
        as_of: NaiveDate,
    ) -> Result<Option<FundChart>, CoreError> {
        let points = self.nav_service.filter_window(history, window, as_of);
        let Some(line) = self.projector.line(&points, &self.settings.line)? else {
            return Ok(None);
        };
        let Some(stats) = self.projector.stats(&points) else {
            return Ok(None);
        };
        Ok(Some(FundChart {
            window,
            line,
            trend: self.projector.trend(&points),
            stats,
            window_return: self.nav_service.window_return(&points),
        }))
    }

    /// Fetch NAV history for `isin` and build the chart for `window`.
    pub async fn load_fund_chart(
        &self,
        isin: &str,
        window: NavWindow,
        as_of: NaiveDate,
    ) -> Result<Option<FundChart>, CoreError> {
        let history = self.nav_provider.fetch_nav_history(isin).await?;
        self.fund_chart(&history, window, as_of)
    }

    pub async fn load_fund_detail(&self, isin: &str) -> Result<FundDetail, CoreError> {
        self.detail_provider.fetch_detail(isin).await
    }

    // ── Discovery ───────────────────────────────────────────────────

    /// Fetch the catalog and apply `query`.
    pub async fn discover_funds(&self, query: &FundQuery) -> Result<Vec<FundListing>, CoreError> {
        let funds = self.catalog_provider.fetch_funds().await?;
        Ok(self.discovery.discover(&funds, query))
    }

    /// Apply `query` to an already fetched catalog.
    #[must_use]
    pub fn filter_funds(&self, funds: &[FundListing], query: &FundQuery) -> Vec<FundListing> {
        self.discovery.discover(funds, query)
    }
}
