//! A [`Transport`] over HTTP, backed by reqwest.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{Span, instrument};
use url::Url;

use crate::contract::Verb;
use crate::error::TransportConfigError;
use crate::transport::{Request, Transport, TransportOutcome};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl HttpTransportBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets the per-request timeout. A timed-out call is a network failure.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, TransportConfigError> {
        let invalid = |reason: String| TransportConfigError::InvalidHeader {
            name: name.as_ref().to_string(),
            reason,
        };
        let header = HeaderName::try_from(name.as_ref()).map_err(|e| invalid(e.to_string()))?;
        let value = HeaderValue::try_from(value.as_ref()).map_err(|e| invalid(e.to_string()))?;
        self.default_headers.insert(header, value);
        Ok(self)
    }

    /// Builds the [`HttpTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<HttpTransport, TransportConfigError> {
        // Paths are joined relative to the base, which therefore needs a trailing slash.
        let normalised = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };
        let base_url = Url::parse(&normalised).map_err(|source| {
            TransportConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            }
        })?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .build()?;

        Ok(HttpTransport { client, base_url })
    }
}

/// HTTP transport for generated clients.
///
/// ## Examples
///
/// ```no_run
/// use std::time::Duration;
/// use tether_define::HttpTransport;
///
/// let transport = HttpTransport::builder("https://shop.example.com/api")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn builder(base_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url)
    }

    /// A transport with default settings.
    ///
    /// ## Errors
    ///
    /// See [`HttpTransportBuilder::build`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportConfigError> {
        Self::builder(base_url).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute(&self, request: Request) -> TransportOutcome {
        let url = match self.base_url.join(request.path.trim_start_matches('/')) {
            Ok(url) => url,
            Err(e) => return TransportOutcome::Fault(format!("invalid request path: {e}")),
        };
        Span::current().record("http.url", url.as_str());

        let method = match request.verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return classify_error(&e),
        };

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        // A status arrived, so a failed body read is never a network failure.
        match response.bytes().await {
            Ok(body) => TransportOutcome::Response {
                status,
                body: body.to_vec(),
            },
            Err(e) => TransportOutcome::Fault(format!("failed to read response body: {e}")),
        }
    }
}

impl Transport for HttpTransport {
    #[instrument(
        name = "tether_request",
        skip(self, request),
        fields(
            http.method = %request.verb,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn send(&self, request: Request) -> TransportOutcome {
        self.execute(request).await
    }
}

/// Connection failures and timeouts before a status mean no response was obtained.
fn classify_error(error: &reqwest::Error) -> TransportOutcome {
    if error.is_connect() || error.is_timeout() {
        TransportOutcome::NetworkFailure(error.to_string())
    } else {
        TransportOutcome::Fault(error.to_string())
    }
}
