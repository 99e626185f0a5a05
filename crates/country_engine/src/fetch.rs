use std::time::Duration;

use lookup_logging::{lookup_debug, lookup_trace};
use url::Url;

use crate::{decode_lookup, FailureKind, FetchError, LookupOutcome};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    /// `None` waits forever.
    pub connect_timeout: Option<Duration>,
    /// `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Builds `{base}/name/{query}` with the query spliced in as typed.
pub fn lookup_url(base_url: &str, query: &str) -> Result<Url, FetchError> {
    let raw = format!("{}/name/{}", base_url.trim_end_matches('/'), query);
    Url::parse(&raw).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[async_trait::async_trait]
pub trait CountryFetcher: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<LookupOutcome, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCountryFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestCountryFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl CountryFetcher for ReqwestCountryFetcher {
    async fn lookup(&self, query: &str) -> Result<LookupOutcome, FetchError> {
        let url = lookup_url(&self.settings.base_url, query)?;
        lookup_trace!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        // The API reports "no matches" as a 404 with a JSON body, so the
        // status code alone decides nothing here.
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        lookup_debug!("lookup answered {} with {} bytes", status, body.len());

        decode_lookup(&body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
