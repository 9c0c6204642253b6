//! HTTP surface: locale-prefixed page routes returning JSON view models,
//! plus the `/api` endpoints.

mod admin;
mod blog;
mod contact;
mod error;
mod home;
mod layout;

pub use error::AppError;

use crate::cache::FetchCache;
use crate::config::Config;
use crate::i18n::locale_router;
use crate::strapi::StrapiClient;
use crate::wordpress::WordPressClient;
use anyhow::{Context, Result};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wordpress: WordPressClient,
    pub strapi: StrapiClient,
}

impl AppState {
    /// Build both clients over one shared response cache.
    pub fn new(config: Config) -> Result<Self> {
        let cache = Arc::new(FetchCache::new());
        let wordpress = WordPressClient::new(&config, Arc::clone(&cache))
            .context("Failed to create WordPress client")?;
        let strapi = StrapiClient::new(&config, cache).context("Failed to create Strapi client")?;

        Ok(Self {
            config: Arc::new(config),
            wordpress,
            strapi,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(admin::health))
        .route("/api/revalidate", post(admin::revalidate))
        .route("/api/contact", post(contact::submit))
        .route("/:locale", get(home::home))
        .route("/:locale/services", get(home::services))
        .route("/:locale/navigation", get(layout::navigation))
        .route("/:locale/posts", get(blog::posts))
        .route("/:locale/posts/:slug", get(blog::post))
        .route("/:locale/pages", get(blog::pages))
        .route("/:locale/pages/:slug", get(blog::page))
        .fallback(blog::not_found)
        .layer(middleware::from_fn(locale_router))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
