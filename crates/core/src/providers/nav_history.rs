use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::chart::ChartPoint;
use crate::models::settings::Endpoints;
use crate::services::ingest_service::IngestService;
use super::traits::NavHistoryProvider;

const PROVIDER: &str = "NavHistoryApi";

/// NAV history API provider.
///
/// - **Endpoint**: `GET {nav_history_url}?isin={isin}` → `{ results: [ { nav_date, nav_value } ] }`
/// - **Order**: the API returns newest first; points are re-sorted ascending.
pub struct NavHistoryApiProvider {
    client: Client,
    base_url: String,
    ingest: IngestService,
}

impl NavHistoryApiProvider {
    pub fn new(endpoints: &Endpoints) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: endpoints.nav_history_url.clone(),
            ingest: IngestService::new(),
        }
    }
}

impl Default for NavHistoryApiProvider {
    fn default() -> Self {
        Self::new(&Endpoints::default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl NavHistoryProvider for NavHistoryApiProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_nav_history(&self, isin: &str) -> Result<Vec<ChartPoint>, CoreError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("isin", isin.trim())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("HTTP {status} for NAV history of {isin}"),
            });
        }

        let body = resp.text().await?;
        self.ingest.parse_nav_history(&body).map_err(|e| {
            log::warn!("{PROVIDER}: unusable NAV history for {isin}: {e}");
            CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse NAV history for {isin}: {e}"),
            }
        })
    }
}
