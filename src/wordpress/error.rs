use thiserror::Error;

/// Failures raised by [`WordPressClient`](super::WordPressClient).
///
/// Blog content is primary, so unlike the Strapi client every failure here
/// propagates to the caller.
#[derive(Debug, Error)]
pub enum WordPressError {
    /// Non-2xx response.
    #[error("WordPress API request failed: {message} (HTTP {status}) at {url}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Connection refused, DNS failure, TLS, etc.
    #[error("WordPress request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse WordPress response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid WordPress URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A slug lookup that a follow-up query depends on came back empty.
    #[error("WordPress {resource} with slug '{slug}' not found")]
    NotFound { resource: &'static str, slug: String },

    #[error("Failed to revalidate WordPress data for tags: {}", failed.join(", "))]
    Revalidation { failed: Vec<String> },
}

impl WordPressError {
    /// HTTP status of the upstream response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// URL of the failed request, when the failure is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Api { url, .. } | Self::Transport { url, .. } | Self::Decode { url, .. } => {
                Some(url)
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Api { status: 404, .. })
    }
}
