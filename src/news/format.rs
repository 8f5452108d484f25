use std::collections::HashSet;

use crate::news::{model::MarketNewsArticle, wire::RawNewsArticle};

const COMPANY_SUMMARY_CHARS: usize = 200;
const MARKET_SUMMARY_CHARS: usize = 150;

/// Where a raw article came from; drives the display defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleKind<'a> {
    /// Company news fetched for `symbol`.
    Company { symbol: &'a str },
    /// General market news.
    Market,
}

fn present(field: Option<&String>) -> bool {
    field.is_some_and(|s| !s.trim().is_empty())
}

/// True when the article has a headline, url, summary and a positive timestamp.
pub fn validate_article(article: &RawNewsArticle) -> bool {
    present(article.headline.as_ref())
        && present(article.url.as_ref())
        && present(article.summary.as_ref())
        && article.datetime.is_some_and(|t| t > 0)
}

/// Reshape a raw article into the display schema.
///
/// Returns `None` when the article fails [`validate_article`].
pub fn format_article(
    article: &RawNewsArticle,
    kind: ArticleKind<'_>,
    round: usize,
) -> Option<MarketNewsArticle> {
    if !validate_article(article) {
        return None;
    }
    let text = |s: &Option<String>| s.as_deref().map(str::trim).unwrap_or_default().to_string();

    let (summary_chars, default_source) = match kind {
        ArticleKind::Company { .. } => (COMPANY_SUMMARY_CHARS, "Company News"),
        ArticleKind::Market => (MARKET_SUMMARY_CHARS, "Market News"),
    };

    let source = match article.source.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default_source.to_string(),
    };

    let (category, related, symbol) = match kind {
        ArticleKind::Company { symbol } => {
            ("company".to_string(), symbol.to_string(), Some(symbol.to_string()))
        }
        ArticleKind::Market => {
            let category = match article.category.as_deref().map(str::trim) {
                Some(c) if !c.is_empty() => c.to_string(),
                _ => "general".to_string(),
            };
            (category, text(&article.related), None)
        }
    };

    Some(MarketNewsArticle {
        id: article
            .id
            .unwrap_or_else(|| i64::try_from(round).unwrap_or(i64::MAX)),
        headline: text(&article.headline),
        summary: shorten(text(&article.summary), summary_chars),
        source,
        url: text(&article.url),
        datetime: article.datetime.unwrap_or_default(),
        image: text(&article.image),
        category,
        related,
        symbol,
        round,
    })
}

/// Cut `s` to at most `max` characters, marking the cut with `...`.
fn shorten(s: String, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", s[..byte_idx].trim_end()),
        None => s,
    }
}

/// Drop repeats of the same `(id, url, headline)`, keeping the first occurrence in input order.
pub(crate) fn dedupe(articles: Vec<RawNewsArticle>) -> Vec<RawNewsArticle> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|a| seen.insert((a.id, a.url.clone(), a.headline.clone())))
        .collect()
}

/// Newest first; equal timestamps keep round order.
pub(crate) fn sort_newest_first(articles: &mut [MarketNewsArticle]) {
    articles.sort_by(|a, b| b.datetime.cmp(&a.datetime).then(a.round.cmp(&b.round)));
}
