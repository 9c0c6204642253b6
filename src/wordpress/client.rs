// WordPress REST HTTP client
//
// Wraps `reqwest::Client` with URL construction, cache-policy handling and
// status checking. The endpoint families (posts, taxonomies, pages, authors,
// site-level lookups) are inherent methods implemented in sibling modules.

use crate::cache::{revalidate_tags, CacheTags, FetchCache, FetchPolicy};
use crate::config::Config;
use crate::wordpress::query::Query;
use crate::wordpress::WordPressError;
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const CLIENT_USER_AGENT: &str = "delice-site WordPress Client";

/// Tag carried by every WordPress response.
pub const GLOBAL_TAG: &str = "wordpress";

/// A fully planned request: where to go and how to cache the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub url: Url,
    pub policy: FetchPolicy,
}

#[derive(Debug, Clone)]
pub struct WordPressClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<FetchCache>,
    revalidate: Duration,
}

impl WordPressClient {
    pub fn new(config: &Config, cache: Arc<FetchCache>) -> Result<Self, WordPressError> {
        Self::with_client(
            reqwest::Client::new(),
            &config.wordpress_url,
            cache,
            config.wordpress_revalidate(),
        )
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        cache: Arc<FetchCache>,
        revalidate: Duration,
    ) -> Result<Self, WordPressError> {
        Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
            revalidate,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Arc<FetchCache> {
        &self.cache
    }

    /// `{base}{path}?{query}`, with the `?` omitted for an empty query.
    pub fn url(&self, path: &str, query: &Query) -> Result<Url, WordPressError> {
        let raw = format!("{}{}", self.base_url, path);
        let url = if query.is_empty() {
            Url::parse(&raw)?
        } else {
            Url::parse_with_params(&raw, query.pairs())?
        };
        Ok(url)
    }

    /// Plan a request with the default revalidation window.
    pub fn request(
        &self,
        path: &str,
        query: &Query,
        tags: CacheTags,
    ) -> Result<ContentRequest, WordPressError> {
        Ok(ContentRequest {
            url: self.url(path, query)?,
            policy: FetchPolicy::new(tags, self.revalidate),
        })
    }

    /// Plan a request tagged `[wordpress, resource, resource-{lang}]`.
    pub fn scoped_request(
        &self,
        path: &str,
        query: &Query,
        resource: &str,
        lang: Option<&str>,
    ) -> Result<ContentRequest, WordPressError> {
        self.request(path, query, CacheTags::scoped(GLOBAL_TAG, resource, lang))
    }

    /// Issue a planned request, serving it from the cache when fresh.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: ContentRequest,
    ) -> Result<T, WordPressError> {
        let key = request.url.to_string();

        if let Some(body) = self.cache.get(&key) {
            debug!("Cache hit: {}", key);
            return serde_json::from_value(body)
                .map_err(|source| WordPressError::Decode { url: key, source });
        }

        debug!("GET {}", key);
        let response = self
            .http
            .get(request.url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(|source| WordPressError::Transport {
                url: key.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordPressError::Api {
                status: status.as_u16(),
                url: key,
                message: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| WordPressError::Transport {
                url: key.clone(),
                source,
            })?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|source| {
            WordPressError::Decode {
                url: key.clone(),
                source,
            }
        })?;
        let decoded = serde_json::from_value(body.clone()).map_err(|source| {
            WordPressError::Decode {
                url: key.clone(),
                source,
            }
        })?;

        self.cache.put(&key, body, &request.policy);
        Ok(decoded)
    }

    /// Fetch a list and keep its first element; an empty list is `None`.
    pub async fn fetch_first<T: DeserializeOwned>(
        &self,
        request: ContentRequest,
    ) -> Result<Option<T>, WordPressError> {
        let items: Vec<T> = self.fetch(request).await?;
        Ok(items.into_iter().next())
    }

    /// Invalidate cached WordPress responses by tag.
    ///
    /// An empty list means every WordPress response. All tags are attempted
    /// even if some fail; already invalidated tags stay invalidated.
    pub fn revalidate(&self, tags: &[String]) -> Result<usize, WordPressError> {
        let defaulted;
        let tags = if tags.is_empty() {
            defaulted = vec![GLOBAL_TAG.to_string()];
            &defaulted
        } else {
            tags
        };

        info!("Revalidating WordPress data: {}", tags.join(", "));
        revalidate_tags(&*self.cache, tags)
            .map_err(|failed| WordPressError::Revalidation { failed })
    }
}
