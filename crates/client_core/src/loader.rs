use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Product,
    error::{ErrorCode, LoadError},
    protocol::ProductsResponse,
};
use tracing::{info, warn};
use url::Url;

use crate::{controller::CatalogViewController, settings::ClientSettings};

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError>;
}

/// One unauthenticated GET against the catalog endpoint.
pub struct HttpCatalogSource {
    http: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    pub fn new(settings: &ClientSettings) -> Result<Self, LoadError> {
        let endpoint = settings
            .endpoint_url()
            .map_err(|err| LoadError::new(ErrorCode::Internal, err.to_string()))?;
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| {
                LoadError::new(
                    ErrorCode::Internal,
                    format!("failed to build http client: {err}"),
                )
            })?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        let body: ProductsResponse = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| classify_request_error(&self.endpoint, &err))?
            .error_for_status()
            .map_err(|err| classify_request_error(&self.endpoint, &err))?
            .json()
            .await
            .map_err(|err| classify_request_error(&self.endpoint, &err))?;

        if let Some(total) = body.total {
            if total > body.products.len() as u64 {
                info!(
                    endpoint = %self.endpoint,
                    received = body.products.len(),
                    total,
                    "endpoint returned a partial catalog"
                );
            }
        }
        Ok(body.products)
    }
}

fn classify_request_error(endpoint: &Url, err: &reqwest::Error) -> LoadError {
    if err.is_timeout() {
        LoadError::new(
            ErrorCode::Timeout,
            format!("request to {endpoint} timed out"),
        )
    } else if let Some(status) = err.status() {
        LoadError::new(
            ErrorCode::HttpStatus,
            format!("{endpoint} returned {status}"),
        )
    } else if err.is_decode() {
        LoadError::new(
            ErrorCode::Decode,
            format!("malformed catalog body from {endpoint}: {err}"),
        )
    } else {
        LoadError::new(
            ErrorCode::Network,
            format!("failed to reach {endpoint}: {err}"),
        )
    }
}

/// Fetches once and installs the result. A failure is recorded on the
/// controller as well as returned.
pub async fn load_catalog(
    source: &dyn CatalogSource,
    controller: &mut CatalogViewController,
) -> Result<usize, LoadError> {
    match source.fetch_products().await {
        Ok(products) => {
            controller.load_catalog(products);
            Ok(controller.catalog().len())
        }
        Err(err) => {
            warn!("catalog fetch failed: {err}");
            controller.fail_load(err.clone());
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
