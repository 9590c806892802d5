use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;

/// Shared inner state for the client.
pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

/// The listing API client.
///
/// Holds an `Arc<ClientInner>` for cheap cloning. Services borrow `&Client`.
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: Arc<ClientInner>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.inner.config.endpoint)
            .finish()
    }
}

impl Client {
    /// Create a new client with default configuration from environment variables.
    ///
    /// Reads `BIZHI_ENDPOINT` and `BIZHI_SIGN` from the environment.
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /// Create a new `ClientBuilder` for customizing client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access the listing service.
    pub fn listing(&self) -> crate::listing::ListingService<'_> {
        crate::listing::ListingService::new(self)
    }

    /// Execute one POST to the listing endpoint, deserializing the JSON
    /// response into `T`.
    ///
    /// The body is fully read before decoding, so the connection is released
    /// on every path. Cancellation of the token aborts the in-flight call
    /// and surfaces as `Error::Cancelled`; the dropped future releases the
    /// connection. No retries: the caller decides what to do with an error.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        body: &impl Serialize,
        cancel: &CancellationToken,
    ) -> Result<T, Error> {
        let inner = &self.inner;
        let headers = inner.config.build_headers();

        let req = inner
            .http
            .post(&inner.config.endpoint)
            .headers(headers)
            .json(body)
            .build()
            .map_err(Error::Transport)?;

        debug!(url = %inner.config.endpoint, "executing listing request");

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            res = inner.http.execute(req) => res.map_err(Error::Transport)?,
        };

        let status = response.status().as_u16();
        let bytes = tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            b = response.bytes() => b.map_err(Error::Transport)?,
        };

        debug!(status, len = bytes.len(), "listing response received");

        // The upstream reports its own status in the envelope `code` field,
        // so the body is decoded regardless of the HTTP status line.
        let decoded = serde_json::from_slice(&bytes)?;
        Ok(decoded)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a `Client` with custom configuration.
pub struct ClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    proxy_url: Option<String>,
    accept_invalid_certs: bool,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::from_env(),
            http_client: None,
            proxy_url: None,
            accept_invalid_certs: false,
        }
    }

    /// Set the listing endpoint URL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the `Sign` header value, replacing the built-in placeholder.
    pub fn sign(mut self, sign: impl Into<String>) -> Self {
        self.config.sign = sign.into();
        self
    }

    /// Set the User-Agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Set the Accept-Language string.
    pub fn accept_language(mut self, lang: impl Into<String>) -> Self {
        self.config.accept_language = lang.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a custom reqwest HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Add a default header.
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<reqwest::header::HeaderName>(),
            value.parse::<reqwest::header::HeaderValue>(),
        ) {
            self.config.default_headers.insert(name, value);
        }
        self
    }

    /// Route all requests through the given proxy URL.
    ///
    /// Ignored if a custom `http_client` is provided.
    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// **Use only in test environments** (e.g. mitmproxy with a self-signed cert).
    /// Ignored if a custom `http_client` is provided.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the `Client`.
    pub fn build(self) -> Client {
        let http = self.http_client.unwrap_or_else(|| {
            let mut builder = reqwest::Client::builder().timeout(self.config.timeout);

            if let Some(ref proxy_url) = self.proxy_url {
                builder = builder.proxy(reqwest::Proxy::all(proxy_url).expect("invalid proxy URL"));
            }
            if self.accept_invalid_certs {
                builder = builder.danger_accept_invalid_certs(true);
            }

            builder.build().expect("failed to build reqwest client")
        });

        Client {
            inner: Arc::new(ClientInner {
                http,
                config: self.config,
            }),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
