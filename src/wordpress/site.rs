// Site-level lookups: languages, menus, media and global ACF options.

use crate::cache::CacheTags;
use crate::wordpress::client::GLOBAL_TAG;
use crate::wordpress::models::{FeaturedMedia, MenuItem, RawLanguage, SiteLanguage};
use crate::wordpress::query::Query;
use crate::wordpress::{WordPressClient, WordPressError};
use serde_json::Value;
use tracing::warn;

const LANGUAGES_PATH: &str = "/wp-json/pll/v1/languages";
const MENU_PATH: &str = "/wp-json/wp/v2/menu";
const MEDIA_PATH: &str = "/wp-json/wp/v2/media";
const ACF_OPTIONS_PATH: &str = "/wp-json/acf/v3/options/options";

impl WordPressClient {
    /// Languages configured in Polylang.
    ///
    /// The language switcher is optional chrome, so any failure degrades to
    /// an empty list instead of failing the page.
    pub async fn get_available_languages(&self) -> Vec<SiteLanguage> {
        let request = match self.request(
            LANGUAGES_PATH,
            &Query::new(),
            CacheTags::new([GLOBAL_TAG, "languages"]),
        ) {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to build languages request: {}", e);
                return Vec::new();
            }
        };

        match self.fetch::<Vec<RawLanguage>>(request).await {
            Ok(raw) => raw.into_iter().map(SiteLanguage::from).collect(),
            Err(e) => {
                warn!("Failed to fetch available languages: {}", e);
                Vec::new()
            }
        }
    }

    /// Navigation menu for a language; empty when the menu endpoint is
    /// missing or failing.
    pub async fn get_menu_by_language(&self, lang: &str) -> Vec<MenuItem> {
        let request = match self.request(
            MENU_PATH,
            &Query::new().lang(Some(lang)),
            CacheTags::new([GLOBAL_TAG.to_string(), format!("menu-{}", lang)]),
        ) {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to build menu request: {}", e);
                return Vec::new();
            }
        };

        match self.fetch(request).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to fetch menu for {}: {}", lang, e);
                Vec::new()
            }
        }
    }

    pub async fn get_featured_media_by_id(&self, id: u64) -> Result<FeaturedMedia, WordPressError> {
        let request = self.request(
            &format!("{}/{}", MEDIA_PATH, id),
            &Query::new(),
            CacheTags::new([GLOBAL_TAG.to_string(), format!("media-{}", id)]),
        )?;
        self.fetch(request).await
    }

    /// Site-wide ACF options page, returned untyped.
    pub async fn get_global_acf_options(&self, lang: Option<&str>) -> Result<Value, WordPressError> {
        let request =
            self.scoped_request(ACF_OPTIONS_PATH, &Query::new().lang(lang), "acf-options", lang)?;
        self.fetch(request).await
    }
}
