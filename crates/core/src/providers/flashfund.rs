use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::fund::{FundDetail, FundListing};
use crate::models::settings::Endpoints;
use crate::services::ingest_service::IngestService;
use super::traits::{FundCatalogProvider, FundDetailProvider};

const PROVIDER: &str = "Flashfund";

/// Flashfund API provider for the mutual-fund catalog and scheme details.
///
/// - **Catalog**: `GET {fund_catalog_url}` → `{ data: [ fund, ... ] }`
/// - **Detail**: `GET {scheme_detail_url}/{isin}` → `{ data: { basic_info, ... } }`
/// - **Auth**: none
pub struct FlashfundProvider {
    client: Client,
    catalog_url: String,
    detail_url: String,
    ingest: IngestService,
}

impl FlashfundProvider {
    pub fn new(endpoints: &Endpoints) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            catalog_url: endpoints.fund_catalog_url.clone(),
            detail_url: endpoints.scheme_detail_url.trim_end_matches('/').to_string(),
            ingest: IngestService::new(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, CoreError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("HTTP {status}"),
            });
        }
        Ok(resp.text().await?)
    }

    fn api_error(e: CoreError, what: &str) -> CoreError {
        log::warn!("{PROVIDER}: unusable {what} response: {e}");
        CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse {what}: {e}"),
        }
    }
}

impl Default for FlashfundProvider {
    fn default() -> Self {
        Self::new(&Endpoints::default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FundCatalogProvider for FlashfundProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_funds(&self) -> Result<Vec<FundListing>, CoreError> {
        let body = self.get_text(&self.catalog_url).await?;
        self.ingest
            .parse_fund_catalog(&body)
            .map_err(|e| Self::api_error(e, "fund catalog"))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FundDetailProvider for FlashfundProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_detail(&self, isin: &str) -> Result<FundDetail, CoreError> {
        let url = format!("{}/{}", self.detail_url, isin.trim());
        let body = self.get_text(&url).await?;
        self.ingest
            .parse_fund_detail(&body)
            .map_err(|e| Self::api_error(e, &format!("scheme detail for {isin}")))
    }
}
