use serde::Deserialize;

/// A news record exactly as Finnhub returns it from `/news` and `/company-news`.
///
/// Every field is optional: the payload is untrusted and gets checked by
/// [`validate_article`](crate::news::validate_article) before use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawNewsArticle {
    pub id: Option<i64>,
    pub category: Option<String>,
    /// Publication time, Unix seconds.
    pub datetime: Option<i64>,
    pub headline: Option<String>,
    pub image: Option<String>,
    pub related: Option<String>,
    pub source: Option<String>,
    pub summary: Option<String>,
    pub url: Option<String>,
}

/// Decode a news array leniently: records that don't fit the shape are dropped.
pub(crate) fn decode_articles(values: Vec<serde_json::Value>) -> Vec<RawNewsArticle> {
    values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect()
}
