//! Local watchlist toggle state.
//!
//! [`WatchlistToggle`] holds whether one symbol is on the user's watchlist and
//! notifies an optional listener on every flip. Persisting the change is the
//! listener's job; nothing here performs I/O.

use std::fmt;

type ChangeCallback = Box<dyn FnMut(&str, bool) + Send>;

pub struct WatchlistToggle {
    symbol: String,
    company: String,
    in_watchlist: bool,
    on_change: Option<ChangeCallback>,
}

impl WatchlistToggle {
    pub fn new(symbol: impl Into<String>, company: impl Into<String>, in_watchlist: bool) -> Self {
        Self {
            symbol: symbol.into(),
            company: company.into(),
            in_watchlist,
            on_change: None,
        }
    }

    /// Registers a listener called with `(symbol, new_state)` after each toggle.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(&str, bool) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Flips the state, notifies the listener, and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.in_watchlist = !self.in_watchlist;
        if let Some(cb) = self.on_change.as_mut() {
            cb(&self.symbol, self.in_watchlist);
        }
        self.in_watchlist
    }

    pub fn is_in_watchlist(&self) -> bool {
        self.in_watchlist
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    /// Button text for the current state.
    pub fn label(&self) -> &'static str {
        if self.in_watchlist {
            "Remove from Watchlist"
        } else {
            "Add to Watchlist"
        }
    }
}

impl fmt::Debug for WatchlistToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchlistToggle")
            .field("symbol", &self.symbol)
            .field("company", &self.company)
            .field("in_watchlist", &self.in_watchlist)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
