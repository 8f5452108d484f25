//! stockdash: the data layer of a stock-market dashboard, backed by Finnhub.
//!
//! - [`news`]: market-news aggregation (round-robin company news, or deduplicated general news).
//! - [`search`]: stock search (popular-profile fan-out, or a single text search).
//! - [`watchlist`]: the local watchlist toggle state.
//!
//! All fetchers are best-effort: one bad symbol or profile never aborts a response.
//!
//! ```no_run
//! # use stockdash::{FinnhubClient, get_news, search_stocks};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FinnhubClient::builder().api_key("your-key").build()?;
//!
//! let news = get_news(&client, &["AAPL", "MSFT"]).await?;
//! let hits = search_stocks(&client, Some("apple")).await;
//! println!("{} articles, {} hits", news.len(), hits.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod news;
pub mod search;
pub mod watchlist;

pub use crate::core::{
    CachePolicy, DashError, DateRange, FinnhubClient, FinnhubClientBuilder, Partial, Settings,
    SourceFailure, date_range,
};
pub use news::{
    ArticleKind, MarketNewsArticle, NewsBuilder, RawNewsArticle, format_article, get_news,
    validate_article,
};
pub use search::{
    FinnhubSearchResult, POPULAR_STOCK_SYMBOLS, StockSearch, StockWithWatchlistStatus, search_stocks,
};
pub use watchlist::WatchlistToggle;

/// Install an env-filtered `fmt` subscriber (`RUST_LOG`, default `info`).
///
/// Dev-only convenience for demos and tests; a second call is a no-op.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
