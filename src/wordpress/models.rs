use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// `{ "rendered": "..." }` wrapper used for titles, content and excerpts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub author: u64,
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
    /// Polylang language code
    #[serde(default)]
    pub lang: Option<String>,
    /// Polylang translations: language code → post id
    #[serde(default)]
    pub translations: HashMap<String, u64>,
    #[serde(default, rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub menu_order: i64,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub translations: HashMap<String, u64>,
    /// Raw ACF payload. WordPress sends `[]` instead of `{}` when a page has
    /// no field groups, so this stays untyped until [`Page::acf`] is called.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acf: Option<Value>,
}

impl Page {
    /// Decode the ACF fields into `T`, falling back to `T::default()` when
    /// the page has none or they do not match.
    pub fn acf<T: DeserializeOwned + Default>(&self) -> T {
        match &self.acf {
            Some(value @ Value::Object(_)) => {
                serde_json::from_value(value.clone()).unwrap_or_default()
            }
            _ => T::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub avatar_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedMedia {
    pub id: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub caption: Rendered,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub mime_type: String,
    pub source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_details: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// A language configured in Polylang, as shown by the language switcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteLanguage {
    pub code: String,
    pub name: String,
    pub slug: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

/// Raw `/pll/v1/languages` entry; `code` is sometimes missing.
#[derive(Debug, Deserialize)]
pub(crate) struct RawLanguage {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub flag: Option<String>,
}

impl From<RawLanguage> for SiteLanguage {
    fn from(raw: RawLanguage) -> Self {
        let code = raw
            .code
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| raw.slug.clone());
        Self {
            code,
            name: raw.name,
            slug: raw.slug,
            locale: raw.locale,
            flag: raw.flag,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TranslationsOnly {
    #[serde(default)]
    pub translations: HashMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_deserialization_minimal() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "slug": "hello",
            "title": {"rendered": "Hello"}
        }))
        .expect("Should deserialize");

        assert_eq!(post.id, 7);
        assert_eq!(post.title.rendered, "Hello");
        assert!(post.tags.is_empty());
        assert!(post.translations.is_empty());
        assert!(post.embedded.is_none());
    }

    #[test]
    fn test_post_deserialization_full() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "slug": "hello",
            "date": "2024-05-01T10:00:00",
            "title": {"rendered": "Hello"},
            "content": {"rendered": "<p>Body</p>", "protected": false},
            "excerpt": {"rendered": "<p>Ex</p>"},
            "author": 2,
            "featured_media": 11,
            "categories": [3, 4],
            "tags": [9],
            "lang": "ru",
            "translations": {"ro": 6, "ru": 7},
            "_embedded": {"author": [{"id": 2}]}
        }))
        .unwrap();

        assert_eq!(post.categories, vec![3, 4]);
        assert_eq!(post.lang.as_deref(), Some("ru"));
        assert_eq!(post.translations.get("ro"), Some(&6));
        assert!(post.embedded.is_some());
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Fields {
        button_text: Option<String>,
    }

    #[test]
    fn test_page_acf_object() {
        let page: Page = serde_json::from_value(json!({
            "id": 1, "slug": "404-page",
            "acf": {"button_text": "Home"}
        }))
        .unwrap();
        let fields: Fields = page.acf();
        assert_eq!(fields.button_text.as_deref(), Some("Home"));
    }

    #[test]
    fn test_page_acf_empty_array_falls_back_to_default() {
        let page: Page = serde_json::from_value(json!({
            "id": 1, "slug": "404-page", "acf": []
        }))
        .unwrap();
        assert_eq!(page.acf::<Fields>(), Fields::default());
    }

    #[test]
    fn test_language_code_falls_back_to_slug() {
        let raw: RawLanguage = serde_json::from_value(json!({
            "name": "Română", "slug": "ro", "locale": "ro_RO"
        }))
        .unwrap();
        let language = SiteLanguage::from(raw);
        assert_eq!(language.code, "ro");
        assert!(language.flag.is_none());

        let raw: RawLanguage = serde_json::from_value(json!({
            "code": "", "name": "English", "slug": "en", "locale": "en_US", "flag": "/en.png"
        }))
        .unwrap();
        let language = SiteLanguage::from(raw);
        assert_eq!(language.code, "en");
        assert_eq!(language.flag.as_deref(), Some("/en.png"));
    }

    #[test]
    fn test_menu_item_optional_fields() {
        let item: MenuItem = serde_json::from_value(json!({
            "id": 1, "title": "Blog", "url": "/posts"
        }))
        .unwrap();
        assert!(item.target.is_none());
        assert!(item.parent.is_none());
        assert!(item.order.is_none());
    }
}
