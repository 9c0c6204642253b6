//! Response cache with tag- and time-based revalidation.
//!
//! Content clients never touch entries directly. They describe each fetch
//! with a [`FetchPolicy`]; the fetch path consults and fills the cache
//! according to it, and [`revalidate_tags`] drops entries by tag.

use dashmap::DashMap;
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache tag must not be empty")]
    EmptyTag,

    #[error("failed to invalidate cache tag '{tag}': {reason}")]
    Invalidation { tag: String, reason: String },
}

/// Ordered, de-duplicated set of cache tags. Empty tags are never kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheTags(Vec<String>);

impl CacheTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if !tag.is_empty() && !kept.contains(&tag) {
                kept.push(tag);
            }
        }
        Self(kept)
    }

    /// `[global, resource, "{resource}-{lang}"]`, the last one only when a
    /// non-empty locale is given.
    pub fn scoped(global: &str, resource: &str, lang: Option<&str>) -> Self {
        let localized = match lang.filter(|l| !l.is_empty()) {
            Some(lang) => format!("{}-{}", resource, lang),
            None => String::new(),
        };
        Self::new([global.to_string(), resource.to_string(), localized])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How a single fetch should be cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPolicy {
    pub tags: CacheTags,
    /// `None` keeps the entry until one of its tags is revalidated.
    pub revalidate: Option<Duration>,
}

impl FetchPolicy {
    pub fn new(tags: CacheTags, revalidate: Duration) -> Self {
        Self {
            tags,
            revalidate: Some(revalidate),
        }
    }
}

#[derive(Debug, Clone)]
struct CachedResponse {
    body: Value,
    tags: CacheTags,
    expires_at: Option<Instant>,
}

impl CachedResponse {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.map(|at| now < at).unwrap_or(true)
    }
}

/// Anything that can drop cached content by tag.
pub trait TagInvalidator: Send + Sync {
    /// Returns the number of entries dropped.
    fn invalidate_tag(&self, tag: &str) -> Result<usize, CacheError>;
}

/// In-process cache of decoded JSON bodies keyed by request URL.
#[derive(Debug, Default)]
pub struct FetchCache {
    entries: DashMap<String, CachedResponse>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh body for `key`, dropping it if it has expired.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_fresh(now) => return Some(entry.body.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            debug!("Cache entry expired: {}", key);
            self.entries.remove(key);
        }
        None
    }

    pub fn put(&self, key: &str, body: Value, policy: &FetchPolicy) {
        if policy.revalidate == Some(Duration::ZERO) {
            return;
        }
        let expires_at = policy.revalidate.map(|ttl| Instant::now() + ttl);
        self.entries.insert(
            key.to_string(),
            CachedResponse {
                body,
                tags: policy.tags.clone(),
                expires_at,
            },
        );
    }

    /// Tags stored with the entry for `key`, if any.
    pub fn tags_for(&self, key: &str) -> Option<CacheTags> {
        self.entries.get(key).map(|entry| entry.tags.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TagInvalidator for FetchCache {
    fn invalidate_tag(&self, tag: &str) -> Result<usize, CacheError> {
        if tag.is_empty() {
            return Err(CacheError::EmptyTag);
        }
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.tags.contains(tag));
        Ok(before.saturating_sub(self.entries.len()))
    }
}

/// Invalidate every tag, continuing past failures.
///
/// Tags invalidated before a failure stay invalidated. Returns the tags
/// that failed, or `Ok` with the total number of dropped entries.
pub fn revalidate_tags(
    invalidator: &dyn TagInvalidator,
    tags: &[String],
) -> Result<usize, Vec<String>> {
    let mut dropped = 0;
    let mut failed = Vec::new();

    for tag in tags {
        match invalidator.invalidate_tag(tag) {
            Ok(count) => {
                debug!("Revalidated tag '{}' ({} entries)", tag, count);
                dropped += count;
            }
            Err(e) => {
                error!("Failed to revalidate tag '{}': {}", tag, e);
                failed.push(tag.clone());
            }
        }
    }

    if failed.is_empty() {
        info!("Revalidated {} tags, dropped {} cached responses", tags.len(), dropped);
        Ok(dropped)
    } else {
        Err(failed)
    }
}
