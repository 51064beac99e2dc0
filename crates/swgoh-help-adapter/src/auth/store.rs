/*
[INPUT]:  Credential-digest keys, bearer tokens and time-to-live values
[OUTPUT]: Cached tokens that disappear once their time-to-live elapses
[POS]:    Auth layer - token storage shared across client instances
[UPDATE]: When adding store backends or changing expiry semantics
*/

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

use chrono::{DateTime, Duration, Utc};

/// Source of the current time for expiry checks
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(start)),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.write().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}

/// Key-value store for session tokens.
///
/// `get` must never return a value whose time-to-live has elapsed.
pub trait TokenStore: Send + Sync + fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite `key`
    fn put(&self, key: &str, value: String, ttl: Duration);
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Thread-safe in-memory token store. Clones share the same entries.
#[derive(Debug, Clone)]
pub struct MemoryTokenStore {
    entries: Arc<RwLock<HashMap<String, CachedToken>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryTokenStore {
    /// Create an empty store driven by the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store driven by `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Number of entries, expired ones included until they are read
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        {
            let guard = self.entries.read().unwrap_or_else(|e| e.into_inner());
            match guard.get(key) {
                Some(entry) if now < entry.expires_at => return Some(entry.token.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // expired: evict, unless a writer refreshed it in between
        let mut guard = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if guard.get(key).is_some_and(|entry| now >= entry.expires_at) {
            guard.remove(key);
        }
        None
    }

    fn put(&self, key: &str, value: String, ttl: Duration) {
        let now = self.clock.now();
        let entry = CachedToken {
            token: value,
            expires_at: now + ttl,
        };
        let mut guard = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // keys for credentials that are never read again would otherwise stay forever
        guard.retain(|_, cached| now < cached.expires_at);
        guard.insert(key.to_string(), entry);
    }
}

/// Process-wide store used by clients built without an explicit one
pub fn shared_token_store() -> Arc<dyn TokenStore> {
    static SHARED: OnceLock<Arc<MemoryTokenStore>> = OnceLock::new();
    SHARED
        .get_or_init(|| Arc::new(MemoryTokenStore::new()))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.is_empty());
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_put_and_get() {
        let store = MemoryTokenStore::new();
        store.put("key", "token".to_string(), Duration::seconds(3600));
        assert_eq!(store.get("key"), Some("token".to_string()));
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryTokenStore::new();
        store.put("key", "first".to_string(), Duration::seconds(3600));
        store.put("key", "second".to_string(), Duration::seconds(3600));
        assert_eq!(store.get("key"), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_entry_expires_with_clock() {
        let clock = ManualClock::default();
        let store = MemoryTokenStore::with_clock(Arc::new(clock.clone()));
        store.put("key", "token".to_string(), Duration::seconds(3600));

        clock.advance(Duration::seconds(3599));
        assert_eq!(store.get("key"), Some("token".to_string()));

        clock.advance(Duration::seconds(1));
        assert!(store.get("key").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_prunes_expired_entries() {
        let clock = ManualClock::default();
        let store = MemoryTokenStore::with_clock(Arc::new(clock.clone()));
        store.put("stale", "old".to_string(), Duration::seconds(60));
        store.put("live", "kept".to_string(), Duration::seconds(3600));

        clock.advance(Duration::seconds(60));
        store.put("fresh", "new".to_string(), Duration::seconds(3600));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("live"), Some("kept".to_string()));
        assert_eq!(store.get("fresh"), Some("new".to_string()));
        assert!(store.get("stale").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.put("key", "token".to_string(), Duration::seconds(60));
        assert_eq!(other.get("key"), Some("token".to_string()));

        other.clear();
        assert!(store.get("key").is_none());
    }

    #[test]
    fn test_shared_store_is_process_wide() {
        let key = "shared-store-test-key";
        shared_token_store().put(key, "token".to_string(), Duration::seconds(60));
        assert_eq!(shared_token_store().get(key), Some("token".to_string()));
    }
}
