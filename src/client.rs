use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::error::{Error, Result};
use crate::product::{Feature, SearchResponse, get_product_paths};
use crate::query::ProductQuery;

/// Production catalogue endpoint. The trailing slash matters: `products` is
/// joined onto it.
pub const DEFAULT_CATALOGUE_URL: &str = "https://services.terrascope.be/catalogue/";

#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Catalogue base URL. Override for test or mirror deployments.
    pub catalogue: String,
    /// Per-request timeout. `None` disables it; the success-path behavior is
    /// unchanged either way.
    pub timeout: Option<Duration>,
    pub verify_tls: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            catalogue: DEFAULT_CATALOGUE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            verify_tls: true,
        }
    }
}

/// Blocking catalogue client. Holds no request state, so clones share the
/// underlying connection pool and calls are independent.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: HttpClient,
}

impl Client {
    pub fn new(opts: ClientOptions) -> Result<Self> {
        let base_url = Url::parse(&opts.catalogue)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("terrascope-catalogue-rs/0.1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = HttpClient::builder().default_headers(headers);
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        if !opts.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        Ok(Self { base_url, http })
    }

    /// Convenience constructor against the production catalogue.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientOptions::default())
    }

    /// Run one product search and return the matching features.
    ///
    /// Anything other than HTTP 200 is an error carrying the status and the
    /// response body. No retries.
    pub fn get_products(&self, query: &ProductQuery) -> Result<Vec<Feature>> {
        let url = self.products_url(query)?;
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        let body = check_status(status, resp.text()?)?;
        parse_search_body(&body)
    }

    /// Search, then collect one band's download paths across the results.
    pub fn product_paths(&self, query: &ProductQuery, band_name: &str) -> Result<Vec<String>> {
        let products = self.get_products(query)?;
        Ok(get_product_paths(&products, band_name))
    }

    fn products_url(&self, query: &ProductQuery) -> Result<Url> {
        let mut url = self.base_url.join("products")?;
        url.query_pairs_mut().extend_pairs(query.to_query_pairs());
        Ok(url)
    }
}

fn check_status(status: StatusCode, body: String) -> Result<String> {
    if status == StatusCode::OK {
        Ok(body)
    } else {
        Err(Error::Status { status, body })
    }
}

fn parse_search_body(body: &str) -> Result<Vec<Feature>> {
    let parsed: SearchResponse = serde_json::from_str(body)?;
    Ok(parsed.features)
}
