use serde::Deserialize;

/* ------------- Minimal serde mapping of /search ------------- */

/// One hit from Finnhub's symbol lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FinnhubSearchResult {
    pub description: Option<String>,
    #[serde(rename = "displaySymbol")]
    pub display_symbol: Option<String>,
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Pull `result` out of a search body; absent or malformed payloads yield no hits.
pub(crate) fn parse_search_results(body: &serde_json::Value) -> Vec<FinnhubSearchResult> {
    body.get("result")
        .and_then(serde_json::Value::as_array)
        .map(|hits| {
            hits.iter()
                .filter_map(|h| serde_json::from_value(h.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/* ------------- Minimal serde mapping of /stock/profile2 ------------- */

/// Company metadata. Finnhub answers `{}` for unknown symbols.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct CompanyProfile {
    pub(crate) name: Option<String>,
    pub(crate) ticker: Option<String>,
    pub(crate) exchange: Option<String>,
    #[allow(dead_code)]
    pub(crate) country: Option<String>,
    #[allow(dead_code)]
    pub(crate) currency: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "finnhubIndustry")]
    pub(crate) industry: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "marketCapitalization")]
    pub(crate) market_capitalization: Option<f64>,
}
