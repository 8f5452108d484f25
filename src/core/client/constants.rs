//! Centralized constants for default endpoints and UA.

/// Crate UA sent with every Finnhub request.
pub(crate) const USER_AGENT: &str = concat!("stockdash/", env!("CARGO_PKG_VERSION"));

/// Finnhub REST API base (endpoint paths are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1/";

/// Environment variable holding the server-only API key.
pub(crate) const ENV_API_KEY: &str = "FINNHUB_API_KEY";

/// Environment variable holding the public (client-exposed) API key.
pub(crate) const ENV_PUBLIC_API_KEY: &str = "FINNHUB_PUBLIC_API_KEY";

/// Optional override for the API base URL.
pub(crate) const ENV_BASE_URL: &str = "FINNHUB_BASE_URL";

/// Connection string for the persistence collaborator.
pub(crate) const ENV_DATABASE_URI: &str = "MONGODB_URI";
