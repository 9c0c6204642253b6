// Strapi REST HTTP client
//
// Section content is supplementary to the blog, so the public getters in
// `sections.rs` swallow failures after logging them. This file only knows
// how to address endpoints and move JSON.

use crate::cache::{CacheTags, FetchCache, FetchPolicy};
use crate::config::Config;
use crate::strapi::models::Envelope;
use crate::strapi::StrapiError;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Tag carried by every Strapi response.
pub const GLOBAL_TAG: &str = "strapi";

/// Singleton sections and collections served under `/api/{endpoint}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Products,
    About,
    Contact,
    Faq,
    Navigation,
    Services,
}

impl Section {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Hero => "hero-section",
            Self::Products => "products-section",
            Self::About => "about-section",
            Self::Contact => "contact-section",
            Self::Faq => "faq-section",
            Self::Navigation => "navigation",
            Self::Services => "services",
        }
    }

    pub fn populate(self) -> Populate {
        match self {
            Self::Contact => Populate::Relations(&["socialLinks", "businessHours", "locations"]),
            _ => Populate::All,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// `populate` directive expanding nested fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Populate {
    /// `populate=*`
    All,
    /// `populate[0]=a&populate[1]=b...`
    Relations(&'static [&'static str]),
}

impl Populate {
    pub fn pairs(self) -> Vec<(String, String)> {
        match self {
            Self::All => vec![("populate".to_string(), "*".to_string())],
            Self::Relations(names) => names
                .iter()
                .enumerate()
                .map(|(i, name)| (format!("populate[{}]", i), name.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StrapiClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
    pub(crate) token: Option<String>,
    cache: Arc<FetchCache>,
    revalidate: Duration,
}

impl StrapiClient {
    pub fn new(config: &Config, cache: Arc<FetchCache>) -> Result<Self, StrapiError> {
        Self::with_client(
            reqwest::Client::new(),
            &config.strapi_url,
            config.strapi_api_token.clone(),
            cache,
            config.strapi_revalidate(),
        )
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        token: Option<String>,
        cache: Arc<FetchCache>,
        revalidate: Duration,
    ) -> Result<Self, StrapiError> {
        Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            cache,
            revalidate,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/{endpoint}` with the given query.
    pub fn url(&self, endpoint: &str, query: &[(String, String)]) -> Result<Url, StrapiError> {
        let raw = format!("{}/api/{}", self.base_url, endpoint);
        let url = if query.is_empty() {
            Url::parse(&raw)?
        } else {
            Url::parse_with_params(&raw, query)?
        };
        Ok(url)
    }

    pub fn section_url(&self, section: Section) -> Result<Url, StrapiError> {
        self.url(section.endpoint(), &section.populate().pairs())
    }

    pub(crate) fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header(CONTENT_TYPE, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a section and unwrap its `data` envelope.
    pub(crate) async fn fetch_section<T: DeserializeOwned>(
        &self,
        section: Section,
    ) -> Result<T, StrapiError> {
        let url = self.section_url(section)?;
        let key = url.to_string();

        let body = match self.cache.get(&key) {
            Some(body) => {
                debug!("Cache hit: {}", key);
                body
            }
            None => {
                let body = self.get_json(url).await?;
                let policy = FetchPolicy::new(
                    CacheTags::new([GLOBAL_TAG, section.endpoint()]),
                    self.revalidate,
                );
                // Only cache bodies that decode; a bad payload should be refetched.
                let envelope: Envelope<T> = decode(&key, body.clone())?;
                self.cache.put(&key, body, &policy);
                return Ok(envelope.data);
            }
        };

        decode::<Envelope<T>>(&key, body).map(|envelope| envelope.data)
    }

    async fn get_json(&self, url: Url) -> Result<Value, StrapiError> {
        let key = url.to_string();
        debug!("GET {}", key);

        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(|source| StrapiError::Transport {
                url: key.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StrapiError::Api {
                status: status.as_u16(),
                url: key,
                message: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| StrapiError::Transport { url: key, source })
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: Value) -> Result<T, StrapiError> {
    serde_json::from_value(body).map_err(|source| StrapiError::Decode {
        url: url.to_string(),
        source,
    })
}
