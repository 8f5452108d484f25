mod aggregate;
mod api;
mod format;
mod model;
mod wire;

pub use format::{ArticleKind, format_article, validate_article};
pub use model::MarketNewsArticle;
pub use wire::RawNewsArticle;

use crate::core::{DashError, FinnhubClient, Partial, date_range};

/// Most articles returned, and the most company-news rounds attempted.
pub const MAX_ARTICLES: usize = 6;
/// Trailing window for company news, in days.
pub const LOOKBACK_DAYS: u32 = 5;

/// Fetches market news for `symbols`, or general market news when the list is empty.
///
/// # Errors
///
/// Returns [`DashError::NewsUnavailable`] when no API key is configured or the
/// general-market fetch fails. Per-symbol failures are logged and skipped.
pub async fn get_news<S: AsRef<str>>(
    client: &FinnhubClient,
    symbols: &[S],
) -> Result<Vec<MarketNewsArticle>, DashError> {
    NewsBuilder::new(client).symbols(symbols).fetch().await
}

/// A builder for the news aggregator.
///
/// With symbols, company news is sampled round-robin (one article per round);
/// without, general market news is deduplicated and trimmed.
#[derive(Debug, Clone)]
pub struct NewsBuilder {
    client: FinnhubClient,
    symbols: Vec<String>,
    lookback_days: u32,
    limit: usize,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with no symbols (general market news).
    pub fn new(client: &FinnhubClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            lookback_days: LOOKBACK_DAYS,
            limit: MAX_ARTICLES,
        }
    }

    /// Symbols to sample company news for. Entries are trimmed and uppercased; blanks are dropped.
    #[must_use]
    pub fn symbols<S: AsRef<str>>(mut self, symbols: &[S]) -> Self {
        self.symbols = symbols.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Sets the company-news window in days. (Default: 5)
    #[must_use]
    pub const fn lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// Sets the maximum number of articles. (Default and upper bound: 6)
    ///
    /// This is also the number of rounds, so it bounds the company-news requests
    /// made per call. Values above [`MAX_ARTICLES`] are clamped.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = if n > MAX_ARTICLES { MAX_ARTICLES } else { n };
        self
    }

    /// Executes the aggregation, logging and dropping per-symbol failures.
    ///
    /// # Errors
    ///
    /// See [`get_news`].
    pub async fn fetch(self) -> Result<Vec<MarketNewsArticle>, DashError> {
        Ok(self.fetch_report().await?.into_items())
    }

    /// Executes the aggregation and returns the articles together with the symbols that failed.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::NewsUnavailable`]; the underlying cause is only logged.
    pub async fn fetch_report(self) -> Result<Partial<MarketNewsArticle>, DashError> {
        match self.run().await {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch news");
                Err(DashError::NewsUnavailable)
            }
        }
    }

    async fn run(&self) -> Result<Partial<MarketNewsArticle>, DashError> {
        let range = date_range(self.lookback_days);
        let token = self.client.token().ok_or(DashError::MissingApiKey)?;

        let symbols = aggregate::normalize_symbols(&self.symbols);
        if symbols.is_empty() {
            let articles = aggregate::general_market(&self.client, token, self.limit).await?;
            return Ok(Partial::from_items(articles));
        }

        Ok(aggregate::round_robin(&self.client, token, &symbols, &range, self.limit).await)
    }
}
