use serde::Serialize;

/// A validated, display-ready news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketNewsArticle {
    /// Finnhub article id, or the round index when the upstream record has none.
    pub id: i64,
    pub headline: String,
    /// Trimmed and shortened summary.
    pub summary: String,
    /// The publisher, or a generic label when Finnhub omits it.
    pub source: String,
    pub url: String,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub datetime: i64,
    /// Thumbnail URL; empty when absent.
    pub image: String,
    /// `"company"` for symbol news, otherwise the upstream category (default `"general"`).
    pub category: String,
    pub related: String,
    /// The symbol whose round produced this article (company news only).
    pub symbol: Option<String>,
    /// The round or position that produced this article; breaks datetime ties.
    pub round: usize,
}
