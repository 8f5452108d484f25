/// Symbols shown when the search box is empty, most prominent first.
pub const POPULAR_STOCK_SYMBOLS: &[&str] = &[
    // Tech giants
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "NFLX", "ORCL", "CRM",
    // Growing tech
    "ADBE", "INTC", "AMD", "PYPL", "UBER", "ZOOM", "SPOT", "SQ", "SHOP", "ROKU",
    "SNOW", "PLTR", "COIN", "RBLX", "DDOG", "CRWD", "NET", "OKTA", "TWLO", "ZM",
    // Financial
    "JPM", "BAC", "WFC", "GS", "MS", "V", "MA", "AXP",
    // Healthcare & consumer
    "JNJ", "PFE", "UNH", "KO", "PEP", "WMT", "HD", "DIS", "NKE", "MCD",
];

/// How many popular symbols get a profile lookup.
pub const POPULAR_LOOKUPS: usize = 10;
