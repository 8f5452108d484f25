use crate::{
    core::{CachePolicy, DashError, DateRange, FinnhubClient, net},
    news::wire::{RawNewsArticle, decode_articles},
};

pub(super) async fn fetch_company_news(
    client: &FinnhubClient,
    token: &str,
    symbol: &str,
    range: &DateRange,
) -> Result<Vec<RawNewsArticle>, DashError> {
    let mut url = client.endpoint("company-news")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("from", &range.from)
        .append_pair("to", &range.to)
        .append_pair("token", token);

    let values: Vec<serde_json::Value> = net::fetch_json(client, url, CachePolicy::NoStore).await?;
    Ok(decode_articles(values))
}

pub(super) async fn fetch_general_news(
    client: &FinnhubClient,
    token: &str,
) -> Result<Vec<RawNewsArticle>, DashError> {
    let mut url = client.endpoint("news")?;
    url.query_pairs_mut()
        .append_pair("category", "general")
        .append_pair("token", token);

    let values: Vec<serde_json::Value> = net::fetch_json(client, url, CachePolicy::NoStore).await?;
    Ok(decode_articles(values))
}
