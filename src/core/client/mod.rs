//! Public client surface + builder.
//! Internals are split into `cache` (revalidation store) and `constants` (UA + defaults).

mod cache;
pub(crate) mod constants;

pub use cache::CachePolicy;

use crate::core::DashError;
use cache::CacheStore;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A cheaply cloneable handle to the Finnhub REST API.
///
/// The client owns the API keys, the base URL and the response cache, so every
/// operation in this crate receives its configuration explicitly instead of
/// reading process-wide state.
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    public_api_key: Option<String>,
    cache: Option<Arc<CacheStore>>,
}

impl FinnhubClient {
    /// Create a new builder.
    pub fn builder() -> FinnhubClientBuilder {
        FinnhubClientBuilder::default()
    }

    /// The token used for requests: the server-only key when set, the public key otherwise.
    pub fn token(&self) -> Option<&str> {
        self.api_key.as_deref().or(self.public_api_key.as_deref())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolve an endpoint path (e.g. `"stock/profile2"`) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, DashError> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        self.cache.as_ref()?.get(url).await
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl: Duration) {
        if let Some(store) = &self.cache {
            store.put(url, body, ttl).await;
        }
    }
}

/* ----------------------- Builder ----------------------- */

pub struct FinnhubClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_key: Option<String>,
    public_api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache: bool,
}

impl Default for FinnhubClientBuilder {
    fn default() -> Self {
        Self {
            user_agent: None,
            base_url: None,
            api_key: None,
            public_api_key: None,
            timeout: None,
            connect_timeout: None,
            cache: true,
        }
    }
}

impl FinnhubClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g. `https://finnhub.io/api/v1/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Server-only API key. Preferred over the public key when both are set.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = non_blank(key.into());
        self
    }

    /// Public API key, used when no server-only key is configured.
    #[must_use]
    pub fn public_api_key(mut self, key: impl Into<String>) -> Self {
        self.public_api_key = non_blank(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable or disable the in-memory revalidation cache. Default: enabled.
    ///
    /// When disabled, every request behaves as [`CachePolicy::NoStore`].
    #[must_use]
    pub const fn cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client fails to build.
    pub fn build(self) -> Result<FinnhubClient, DashError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(FinnhubClient {
            http: httpb.build()?,
            base_url: with_trailing_slash(base_url),
            api_key: self.api_key,
            public_api_key: self.public_api_key,
            cache: self.cache.then(|| Arc::new(CacheStore::default())),
        })
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// `Url::join` drops the last path segment unless the base ends in '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
