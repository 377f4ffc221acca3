use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::chart::ChartPoint;
use crate::models::fund::{FundDetail, FundListing};

/// Source of the fund discovery catalog.
///
/// Implementations only fetch and hand the body to `IngestService`; all
/// validation lives there, so a replacement API touches one file.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FundCatalogProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    async fn fetch_funds(&self) -> Result<Vec<FundListing>, CoreError>;
}

/// Source of scheme detail pages, keyed by ISIN.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FundDetailProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_detail(&self, isin: &str) -> Result<FundDetail, CoreError>;
}

/// Source of NAV history, keyed by ISIN.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait NavHistoryProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Full NAV history, ascending by date.
    async fn fetch_nav_history(&self, isin: &str) -> Result<Vec<ChartPoint>, CoreError>;
}
