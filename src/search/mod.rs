mod api;
mod model;
mod popular;
mod wire;

pub use model::StockWithWatchlistStatus;
pub use popular::{POPULAR_LOOKUPS, POPULAR_STOCK_SYMBOLS};
pub use wire::FinnhubSearchResult;

use futures::future::join_all;

use crate::core::{DashError, FinnhubClient, Partial};
use model::SearchCandidate;
use wire::CompanyProfile;

/// Most hits returned by a search.
pub const MAX_RESULTS: usize = 15;

const DEFAULT_EXCHANGE: &str = "US";
const DEFAULT_KIND: &str = "Stock";
const PROFILE_KIND: &str = "Common Stock";

/* ---------------- Public API ---------------- */

/// Searches for stocks matching `query`, or lists popular stocks when the query is empty.
///
/// Never fails: a missing API key or a failed upstream call yields an empty (or
/// partial) list, and the cause is logged.
pub async fn search_stocks(client: &FinnhubClient, query: Option<&str>) -> Vec<StockWithWatchlistStatus> {
    let mut search = StockSearch::new(client);
    if let Some(q) = query {
        search = search.query(q);
    }
    search.fetch().await
}

/// A builder for stock searches.
#[derive(Debug, Clone)]
pub struct StockSearch {
    client: FinnhubClient,
    query: String,
    popular: Vec<String>,
}

impl StockSearch {
    /// Creates a new `StockSearch` with an empty query and the default popular list.
    pub fn new(client: &FinnhubClient) -> Self {
        Self {
            client: client.clone(),
            query: String::new(),
            popular: POPULAR_STOCK_SYMBOLS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Sets the free-text query. Surrounding whitespace is ignored.
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    /// Replaces the list used for empty queries; only the first ten entries are looked up.
    #[must_use]
    pub fn popular_symbols<S: AsRef<str>>(mut self, symbols: &[S]) -> Self {
        self.popular = symbols.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Executes the search, logging and dropping any failures.
    pub async fn fetch(self) -> Vec<StockWithWatchlistStatus> {
        self.fetch_report().await.into_items()
    }

    /// Executes the search and returns the hits together with the lookups that failed.
    pub async fn fetch_report(self) -> Partial<StockWithWatchlistStatus> {
        let mut report = Partial::default();

        let Some(token) = self.client.token() else {
            let e = DashError::MissingApiKey;
            tracing::error!(error = %e, "stock search unavailable");
            report.record_failure("token", e);
            return report;
        };

        let trimmed = self.query.trim();
        let candidates = if trimmed.is_empty() {
            self.popular_candidates(token, &mut report).await
        } else {
            match api::fetch_search(&self.client, token, trimmed).await {
                Ok(hits) => hits.into_iter().map(candidate_from_hit).collect(),
                Err(e) => {
                    tracing::error!(query = %trimmed, error = %e, "stock search failed");
                    report.record_failure(trimmed, e);
                    Vec::new()
                }
            }
        };

        report.items = candidates
            .into_iter()
            .filter_map(to_stock)
            .take(MAX_RESULTS)
            .collect();
        report
    }

    /// Looks up profiles for the leading popular symbols concurrently; a failed
    /// lookup only removes its own symbol.
    async fn popular_candidates(
        &self,
        token: &str,
        report: &mut Partial<StockWithWatchlistStatus>,
    ) -> Vec<SearchCandidate> {
        let lookups = self.popular.iter().take(POPULAR_LOOKUPS).map(|sym| async move {
            let res = api::fetch_profile(&self.client, token, sym).await;
            (sym, res)
        });

        let mut candidates = Vec::new();
        for (sym, res) in join_all(lookups).await {
            match res {
                Ok(profile) => candidates.extend(candidate_from_profile(sym, profile)),
                Err(e) => {
                    tracing::warn!(symbol = %sym, error = %e, "profile lookup failed; skipping");
                    report.record_failure(sym.as_str(), e);
                }
            }
        }
        candidates
    }
}

/* ---------------- internal helpers ---------------- */

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

/// Profiles without a resolvable name are dropped.
fn candidate_from_profile(symbol: &str, profile: CompanyProfile) -> Option<SearchCandidate> {
    let name = non_empty(profile.name).or_else(|| non_empty(profile.ticker))?;
    Some(SearchCandidate {
        symbol: symbol.to_uppercase(),
        description: Some(name),
        display_symbol: None,
        kind: Some(PROFILE_KIND.to_string()),
        exchange: non_empty(profile.exchange),
    })
}

fn candidate_from_hit(hit: FinnhubSearchResult) -> SearchCandidate {
    SearchCandidate {
        symbol: hit.symbol.unwrap_or_default(),
        description: hit.description,
        display_symbol: hit.display_symbol,
        kind: hit.kind,
        exchange: None,
    }
}

fn to_stock(c: SearchCandidate) -> Option<StockWithWatchlistStatus> {
    let symbol = c.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return None;
    }
    Some(StockWithWatchlistStatus {
        name: non_empty(c.description).unwrap_or_else(|| symbol.clone()),
        exchange: non_empty(c.display_symbol)
            .or_else(|| non_empty(c.exchange))
            .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string()),
        kind: non_empty(c.kind).unwrap_or_else(|| DEFAULT_KIND.to_string()),
        is_in_watchlist: false,
        symbol,
    })
}
