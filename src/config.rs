use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.zzzmh.cn/bz/getJson";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:84.0) Gecko/20100101 Firefox/84.0";
pub const DEFAULT_ACCEPT_LANGUAGE: &str =
    "zh-CN,zh;q=0.8,zh-TW;q=0.7,zh-HK;q=0.5,en-US;q=0.3,en;q=0.2";

/// The upstream API accepts this literal in the `Sign` header. It is not a
/// real signature; deployments that have one override it via the builder.
pub const PLACEHOLDER_SIGN: &str = "error";

/// Configuration for the listing API client.
///
/// Owns the fixed header table sent verbatim on every request, so
/// per-deployment overrides (a real `Sign` value, a mirror endpoint) are
/// plain construction-time configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub sign: String,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout: Duration,
    pub default_headers: HeaderMap,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables and defaults.
    ///
    /// Reads `BIZHI_ENDPOINT` and `BIZHI_SIGN` from the environment and
    /// falls back to the built-in defaults when unset.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("BIZHI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let sign = std::env::var("BIZHI_SIGN").unwrap_or_else(|_| PLACEHOLDER_SIGN.to_string());

        Self {
            endpoint,
            sign,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }

    /// Build the full header table for requests.
    ///
    /// Every request carries the same headers; the upstream API rejects
    /// bodies without the browser-like set.
    pub fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(val) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(reqwest::header::USER_AGENT, val);
        }
        if let Ok(val) = HeaderValue::from_str(&self.accept_language) {
            headers.insert(reqwest::header::ACCEPT_LANGUAGE, val);
        }
        if let Ok(val) = HeaderValue::from_str(&self.sign) {
            headers.insert("sign", val);
        }
        headers.insert("dnt", HeaderValue::from_static("1"));
        headers.insert("te", HeaderValue::from_static("Trailers"));
        headers.insert(reqwest::header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        // Merge any user-provided default headers (they override built-in ones)
        for (key, value) in &self.default_headers {
            headers.insert(key, value.clone());
        }

        headers
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
