//! Client for the storefront's read endpoints.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use subscriptio_core::config::StorefrontConfig;

use crate::models::{Cart, Invoice, ProductDetail, ProfileData, SubscriptionProduct};
use crate::{FetchError, Response};

/// The reads the storefront's pages issue.
///
/// Pages depend on this trait rather than on [`ApiClient`] so they can be
/// rendered against canned data.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// `GET /api/invoices`
    async fn invoices(&self) -> Result<Vec<Invoice>, FetchError>;

    /// `GET /api/products?type=subscription`
    async fn subscription_products(&self) -> Result<Vec<SubscriptionProduct>, FetchError>;

    /// `GET {api_url}/products/{id}`
    async fn product(&self, id: &str) -> Result<ProductDetail, FetchError>;

    /// `GET /api/cart`
    async fn cart(&self) -> Result<Cart, FetchError>;

    /// `GET /api/profile`
    async fn profile(&self) -> Result<ProfileData, FetchError>;
}

/// HTTP implementation of [`StorefrontApi`].
///
/// Same-site reads (`/api/...`) resolve against `origin`; product detail
/// resolves against `api_url`. Both must be absolute by the time a request
/// is sent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
    api_url: String,
    default_headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a client for the given bases.
    pub fn new(origin: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into(),
            api_url: api_url.into(),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    /// Create a client from the storefront configuration.
    ///
    /// A relative `api_url` (such as the default `/api`) is resolved
    /// against the configured origin.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let api_url = if config.api_url.starts_with('/') {
            config.site_url(&config.api_url)
        } else {
            config.api_url.clone()
        };
        Self::new(config.origin.clone(), api_url)
    }

    /// Add a header sent with every request.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Absolute URL for a same-site path.
    pub fn site_url(&self, path: &str) -> Result<Url, FetchError> {
        let joined = format!(
            "{}/{}",
            self.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| FetchError::InvalidUrl(format!("{joined}: {e}")))
    }

    /// Absolute URL for a catalogue resource. Each segment is percent-encoded.
    pub fn api_endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.api_url)))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode a JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let mut request = self.http.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        for (key, value) in &self.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        tracing::debug!(%url, "storefront read");
        let result: Result<T, FetchError> = async {
            let response = Response::read(request.send().await?).await?;
            response.error_for_status()?.json::<T>()
        }
        .await;

        if let Err(ref e) = result {
            tracing::warn!(%url, error = %e, "storefront read failed");
        }
        result
    }
}

#[async_trait(?Send)]
impl StorefrontApi for ApiClient {
    async fn invoices(&self) -> Result<Vec<Invoice>, FetchError> {
        self.get_json(self.site_url("/api/invoices")?, &[]).await
    }

    async fn subscription_products(&self) -> Result<Vec<SubscriptionProduct>, FetchError> {
        self.get_json(self.site_url("/api/products")?, &[("type", "subscription")])
            .await
    }

    async fn product(&self, id: &str) -> Result<ProductDetail, FetchError> {
        self.get_json(self.api_endpoint(["products", id])?, &[]).await
    }

    async fn cart(&self) -> Result<Cart, FetchError> {
        self.get_json(self.site_url("/api/cart")?, &[]).await
    }

    async fn profile(&self) -> Result<ProfileData, FetchError> {
        self.get_json(self.site_url("/api/profile")?, &[]).await
    }
}
