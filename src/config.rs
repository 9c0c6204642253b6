use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // WordPress
    pub wordpress_url: String,
    pub wordpress_revalidate_secs: u64,

    // Strapi
    pub strapi_url: String,
    pub strapi_api_token: Option<String>,
    pub strapi_revalidate_secs: u64,

    // Contact form
    pub contact_email: String,

    // Server
    pub port: u16,
    pub revalidate_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let wordpress_url = std::env::var("WORDPRESS_URL")
            .context("WORDPRESS_URL environment variable is not defined")?;
        url::Url::parse(&wordpress_url)
            .with_context(|| format!("WORDPRESS_URL is not a valid URL: {}", wordpress_url))?;

        Ok(Self {
            wordpress_url: trim_base(&wordpress_url),
            wordpress_revalidate_secs: std::env::var("WORDPRESS_REVALIDATE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),

            strapi_url: trim_base(
                &std::env::var("NEXT_PUBLIC_STRAPI_URL")
                    .unwrap_or_else(|_| "http://localhost:1339".to_string()),
            ),
            // The server-side token wins; the public one is only a fallback
            strapi_api_token: non_empty_var("STRAPI_API_TOKEN")
                .or_else(|| non_empty_var("NEXT_PUBLIC_STRAPI_API_TOKEN")),
            strapi_revalidate_secs: std::env::var("STRAPI_REVALIDATE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),

            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "hello@delice.com".to_string()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            revalidate_secret: non_empty_var("REVALIDATE_SECRET"),
        })
    }

    pub fn wordpress_revalidate(&self) -> Duration {
        Duration::from_secs(self.wordpress_revalidate_secs)
    }

    pub fn strapi_revalidate(&self) -> Duration {
        Duration::from_secs(self.strapi_revalidate_secs)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
