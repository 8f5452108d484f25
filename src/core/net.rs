use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{CachePolicy, DashError, FinnhubClient};

/// Issue a single GET and decode the JSON body.
///
/// With [`CachePolicy::Revalidate`] a body cached within the window is decoded
/// without touching the network, and fresh bodies are stored for that window.
/// Any non-2xx status is an error. Transport errors are stripped of the
/// request URL, which carries the token.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &FinnhubClient,
    url: Url,
    policy: CachePolicy,
) -> Result<T, DashError> {
    if let CachePolicy::Revalidate(_) = policy
        && let Some(body) = client.cache_get(&url).await
    {
        tracing::debug!(url = %redacted(&url), "serving cached response");
        return Ok(serde_json::from_str(&body)?);
    }

    tracing::debug!(url = %redacted(&url), "GET");
    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    if !resp.status().is_success() {
        return Err(DashError::Status {
            status: resp.status().as_u16(),
            url: redacted(&url),
        });
    }

    let body = resp.text().await.map_err(reqwest::Error::without_url)?;
    let decoded = serde_json::from_str(&body)?;

    if let CachePolicy::Revalidate(ttl) = policy {
        client.cache_put(&url, &body, ttl).await;
    }
    Ok(decoded)
}

/// Render a URL for logs and errors with the `token` query value masked.
pub(crate) fn redacted(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "token") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
