use std::time::Duration;

use crate::{
    core::{CachePolicy, DashError, FinnhubClient, net},
    search::wire::{CompanyProfile, FinnhubSearchResult, parse_search_results},
};

const PROFILE_REVALIDATE: Duration = Duration::from_secs(60 * 60);
const SEARCH_REVALIDATE: Duration = Duration::from_secs(30 * 60);

pub(super) async fn fetch_profile(
    client: &FinnhubClient,
    token: &str,
    symbol: &str,
) -> Result<CompanyProfile, DashError> {
    let mut url = client.endpoint("stock/profile2")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("token", token);

    net::fetch_json(client, url, CachePolicy::Revalidate(PROFILE_REVALIDATE)).await
}

pub(super) async fn fetch_search(
    client: &FinnhubClient,
    token: &str,
    query: &str,
) -> Result<Vec<FinnhubSearchResult>, DashError> {
    let mut url = client.endpoint("search")?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("token", token);

    let body: serde_json::Value =
        net::fetch_json(client, url, CachePolicy::Revalidate(SEARCH_REVALIDATE)).await?;
    Ok(parse_search_results(&body))
}
