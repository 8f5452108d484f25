use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use url::Url;

/// How the fetch helper treats the in-memory response cache for a single request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    /// Always hit the network; never read or write the cache.
    NoStore,
    /// Serve a cached body younger than the window; otherwise fetch and store it.
    Revalidate(Duration),
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// URL-keyed body cache shared by all clones of a client.
#[derive(Debug, Default)]
pub(crate) struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
}

impl CacheStore {
    pub(crate) async fn get(&self, url: &Url) -> Option<String> {
        let guard = self.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn put(&self, url: &Url, body: &str, ttl: Duration) {
        let now = Instant::now();
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: now + ttl,
        };
        let mut guard = self.map.write().await;
        guard.retain(|_, e| e.expires_at > now);
        guard.insert(url.as_str().to_string(), entry);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.map.read().await.len()
    }
}
