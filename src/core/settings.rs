use url::Url;

use crate::core::client::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_DATABASE_URI, ENV_PUBLIC_API_KEY,
};
use crate::core::{DashError, FinnhubClient};

/// Deployment configuration, normally read from the environment.
///
/// Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Server-only Finnhub key (`FINNHUB_API_KEY`).
    pub api_key: Option<String>,
    /// Public Finnhub key (`FINNHUB_PUBLIC_API_KEY`).
    pub public_api_key: Option<String>,
    /// API base override (`FINNHUB_BASE_URL`).
    pub base_url: Option<String>,
    /// Connection string of the persistence layer (`MONGODB_URI`). Not used by this crate's fetchers.
    pub database_uri: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            api_key: read(ENV_API_KEY),
            public_api_key: read(ENV_PUBLIC_API_KEY),
            base_url: read(ENV_BASE_URL),
            database_uri: read(ENV_DATABASE_URI),
        }
    }

    /// Build a [`FinnhubClient`] carrying these keys.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client fails to build.
    pub fn client(&self) -> Result<FinnhubClient, DashError> {
        let mut builder = FinnhubClient::builder();
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(key) = &self.public_api_key {
            builder = builder.public_api_key(key.clone());
        }
        if let Some(base) = &self.base_url {
            builder = builder.base_url(Url::parse(base)?);
        }
        builder.build()
    }
}
