use crate::core::DashError;

/// A fetch that failed for one source (a symbol, a profile, an endpoint) and was skipped.
#[derive(Debug)]
pub struct SourceFailure {
    /// What was being fetched: a symbol, a search query, or `"token"` for a missing key.
    pub source: String,
    /// Why it was skipped.
    pub error: DashError,
}

/// Best-effort result: whatever was collected, plus the sources that were skipped.
///
/// A non-empty `failures` list never invalidates `items`.
#[derive(Debug)]
pub struct Partial<T> {
    /// Everything that was collected, already shaped and truncated.
    pub items: Vec<T>,
    /// Sources that were skipped, in the order they failed.
    pub failures: Vec<SourceFailure>,
}

impl<T> Default for Partial<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> Partial<T> {
    /// A complete result with no failures.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            failures: Vec::new(),
        }
    }

    /// True when every source answered.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Drops the failure list, keeping only the collected items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn record_failure(&mut self, source: impl Into<String>, error: DashError) {
        self.failures.push(SourceFailure {
            source: source.into(),
            error,
        });
    }
}
