use thiserror::Error;

/// Failures inside [`StrapiClient`](super::StrapiClient).
///
/// Section getters log these and return `None`; only the contact submission
/// hands them to the caller.
#[derive(Debug, Error)]
pub enum StrapiError {
    #[error("Strapi API call failed: {message} (HTTP {status}) at {url}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Strapi request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse Strapi response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid Strapi URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl StrapiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
