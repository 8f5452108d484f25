use crate::{
    core::{DashError, DateRange, FinnhubClient, Partial},
    news::{
        api,
        format::{ArticleKind, dedupe, format_article, sort_newest_first, validate_article},
        model::MarketNewsArticle,
        wire::RawNewsArticle,
    },
};

/// Trim and uppercase, dropping empty entries. Duplicates are kept.
pub(super) fn normalize_symbols<S: AsRef<str>>(symbols: &[S]) -> Vec<String> {
    symbols
        .iter()
        .map(|s| s.as_ref().trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Visit `symbols` cyclically, one company-news fetch per round, keeping the
/// first valid article of each response. Stops after `limit` rounds or once
/// `limit` articles are collected.
pub(super) async fn round_robin(
    client: &FinnhubClient,
    token: &str,
    symbols: &[String],
    range: &DateRange,
    limit: usize,
) -> Partial<MarketNewsArticle> {
    let mut out = Partial::default();
    if symbols.is_empty() {
        return out;
    }

    for round in 0..limit {
        let symbol = &symbols[round % symbols.len()];

        match api::fetch_company_news(client, token, symbol, range).await {
            Ok(news) => {
                let first_valid = news
                    .iter()
                    .find_map(|a| format_article(a, ArticleKind::Company { symbol }, round));
                out.items.extend(first_valid);
            }
            Err(e) => {
                tracing::warn!(%symbol, round, error = %e, "company news fetch failed; skipping round");
                out.record_failure(symbol.as_str(), e);
            }
        }

        if out.items.len() >= limit {
            break;
        }
    }

    sort_newest_first(&mut out.items);
    out.items.truncate(limit);
    out
}

pub(super) async fn general_market(
    client: &FinnhubClient,
    token: &str,
    limit: usize,
) -> Result<Vec<MarketNewsArticle>, DashError> {
    let news = api::fetch_general_news(client, token).await?;
    Ok(shape_general(news, limit))
}

/// Dedupe, keep valid articles, cap at `limit`, tag each with its position.
pub(super) fn shape_general(news: Vec<RawNewsArticle>, limit: usize) -> Vec<MarketNewsArticle> {
    let mut articles: Vec<MarketNewsArticle> = dedupe(news)
        .iter()
        .filter(|a| validate_article(a))
        .take(limit)
        .enumerate()
        .filter_map(|(index, a)| format_article(a, ArticleKind::Market, index))
        .collect();
    sort_newest_first(&mut articles);
    articles
}
