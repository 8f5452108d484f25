use serde::Serialize;

/// An internal search hit, common to the popular-profile path and the text-search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchCandidate {
    pub(crate) symbol: String,
    pub(crate) description: Option<String>,
    pub(crate) display_symbol: Option<String>,
    pub(crate) kind: Option<String>,
    /// Exchange name from a company profile, when one was fetched.
    pub(crate) exchange: Option<String>,
}

/// A stock search hit as shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockWithWatchlistStatus {
    /// Uppercased ticker; never empty.
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Always `false`: search does not consult stored watchlists.
    pub is_in_watchlist: bool,
}
