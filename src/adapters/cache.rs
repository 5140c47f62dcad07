use crate::domain::model::CacheKey;
use crate::domain::ports::CacheInvalidator;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: serde_json::Value,
    pub stale: bool,
    pub updated_at: DateTime<Utc>,
}

/// 以 key 覆寫的 client 端資料快取。Clone 共用同一份資料。
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: CacheKey, value: serde_json::Value) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key,
            CacheEntry {
                value,
                stale: false,
                updated_at: Utc::now(),
            },
        );
    }

    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    pub fn is_stale(&self, key: &CacheKey) -> bool {
        self.get(key).map(|entry| entry.stale).unwrap_or(false)
    }

    /// 需要重新抓取的 key
    pub fn stale_keys(&self) -> Vec<CacheKey> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .iter()
            .filter(|(_, entry)| entry.stale)
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheInvalidator for MemoryCache {
    fn invalidate(&self, predicate: &dyn Fn(&CacheKey) -> bool) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut count = 0;
        for (key, entry) in entries.iter_mut() {
            if predicate(key) {
                entry.stale = true;
                count += 1;
                tracing::debug!("Marked cache entry {} as stale", key);
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_overwrites_and_clears_stale_flag() {
        let cache = MemoryCache::new();
        let key = CacheKey::path("/api/domains");
        cache.insert(key.clone(), json!([1]));
        cache.invalidate(&|_| true);
        assert!(cache.is_stale(&key));

        cache.insert(key.clone(), json!([1, 2]));
        let entry = cache.get(&key).unwrap();
        assert!(!entry.stale);
        assert_eq!(entry.value, json!([1, 2]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_counts_matches() {
        let cache = MemoryCache::new();
        cache.insert(CacheKey::path("/api/domains"), json!([]));
        cache.insert(CacheKey::path("/api/domains/acme.com"), json!({}));
        cache.insert(CacheKey::path("/api/workspaces"), json!([]));

        let hits = cache.invalidate(&|key| key.as_path().is_some_and(|p| p.contains("acme")));
        assert_eq!(hits, 1);
        assert_eq!(cache.stale_keys(), vec![CacheKey::path("/api/domains/acme.com")]);
    }

    #[test]
    fn test_missing_key_is_not_stale() {
        let cache = MemoryCache::new();
        assert!(cache.is_empty());
        assert!(!cache.is_stale(&CacheKey::path("/api/domains")));
    }
}
