use std::future::Future;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use tokio::time::timeout;
use url::Url;

use crate::breach::BreachResponse;
use crate::config::LookupConfig;
use crate::lookup::error::LookupError;

/// Everything outside the RFC 3986 unreserved set, so `@`, `+`, `/`
/// and `%` in an address stay inside a single path segment.
const EMAIL_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Source of breach data for one email address.
///
/// The controller only depends on this seam, so tests can substitute a
/// scripted source for the HTTP client.
pub trait BreachSource: Send + Sync + 'static {
    fn check_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<BreachResponse, LookupError>> + Send;
}

/// HTTP client for the `check-email` endpoint.
pub struct BreachClient {
    client: Client,
    base_url: String,
    request_timeout: Option<Duration>,
}

impl BreachClient {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        Url::parse(&config.base_url).map_err(|e| LookupError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| LookupError::Connection { source: e })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: config
                .request_timeout_seconds
                .map(|secs| Duration::from_secs(u64::from(secs))),
        })
    }

    /// Full request URL for `email`, with the address as one encoded path segment.
    pub fn lookup_url(&self, email: &str) -> String {
        format!(
            "{}/check-email/{}",
            self.base_url,
            utf8_percent_encode(email, EMAIL_SEGMENT)
        )
    }

    async fn fetch(&self, email: &str) -> Result<BreachResponse, LookupError> {
        let url = self.lookup_url(email);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Connection { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Connection { source: e })?;

        serde_json::from_slice(&body).map_err(|e| LookupError::MalformedResponse { source: e })
    }
}

impl BreachSource for BreachClient {
    async fn check_email(&self, email: &str) -> Result<BreachResponse, LookupError> {
        match self.request_timeout {
            Some(limit) => timeout(limit, self.fetch(email))
                .await
                .map_err(|_| LookupError::Timeout {
                    duration: limit.as_secs(),
                })?,
            None => self.fetch(email).await,
        }
    }
}
