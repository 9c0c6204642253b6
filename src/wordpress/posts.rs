use crate::cache::CacheTags;
use crate::wordpress::client::GLOBAL_TAG;
use crate::wordpress::models::{Post, TranslationsOnly};
use crate::wordpress::query::{PostFilter, Query};
use crate::wordpress::{WordPressClient, WordPressError};
use std::collections::HashMap;
use tracing::debug;

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";

/// Query shared by every id-filtered post listing.
fn listing(key: &'static str, id: u64, lang: Option<&str>) -> Query {
    Query::new()
        .set("_embed", true)
        .set("per_page", 100)
        .set(key, id)
        .lang(lang)
}

impl WordPressClient {
    pub async fn get_all_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, WordPressError> {
        let lang = filter.lang.as_deref();
        let request = self.scoped_request(POSTS_PATH, &filter.to_query(), "posts", lang)?;
        self.fetch(request).await
    }

    pub async fn get_post_by_id(&self, id: u64, lang: Option<&str>) -> Result<Post, WordPressError> {
        let request = self.scoped_request(
            &format!("{}/{}", POSTS_PATH, id),
            &Query::new().lang(lang),
            &format!("post-{}", id),
            lang,
        )?;
        self.fetch(request).await
    }

    pub async fn get_post_by_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Option<Post>, WordPressError> {
        let request = self.scoped_request(
            POSTS_PATH,
            &Query::new().set("slug", slug).lang(lang),
            &format!("post-{}", slug),
            lang,
        )?;
        self.fetch_first(request).await
    }

    pub async fn get_posts_by_category(
        &self,
        category_id: u64,
        lang: Option<&str>,
    ) -> Result<Vec<Post>, WordPressError> {
        let request = self.scoped_request(
            POSTS_PATH,
            &listing("categories", category_id, lang),
            &format!("category-{}", category_id),
            lang,
        )?;
        self.fetch(request).await
    }

    pub async fn get_posts_by_tag(
        &self,
        tag_id: u64,
        lang: Option<&str>,
    ) -> Result<Vec<Post>, WordPressError> {
        let request = self.scoped_request(
            POSTS_PATH,
            &listing("tags", tag_id, lang),
            &format!("tag-{}", tag_id),
            lang,
        )?;
        self.fetch(request).await
    }

    pub async fn get_posts_by_author(
        &self,
        author_id: u64,
        lang: Option<&str>,
    ) -> Result<Vec<Post>, WordPressError> {
        let request = self.scoped_request(
            POSTS_PATH,
            &listing("author", author_id, lang),
            &format!("author-{}", author_id),
            lang,
        )?;
        self.fetch(request).await
    }

    /// Resolve the category slug, then list its posts.
    pub async fn get_posts_by_category_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Vec<Post>, WordPressError> {
        let category = self
            .get_category_by_slug(slug, lang)
            .await?
            .ok_or_else(|| WordPressError::NotFound {
                resource: "category",
                slug: slug.to_string(),
            })?;

        let request = self.scoped_request(
            POSTS_PATH,
            &listing("categories", category.id, lang),
            &format!("category-{}", slug),
            lang,
        )?;
        self.fetch(request).await
    }

    /// Resolve the tag slug, then list its posts.
    pub async fn get_posts_by_tag_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Vec<Post>, WordPressError> {
        let tag = self
            .get_tag_by_slug(slug, lang)
            .await?
            .ok_or_else(|| WordPressError::NotFound {
                resource: "tag",
                slug: slug.to_string(),
            })?;

        let request = self.scoped_request(
            POSTS_PATH,
            &listing("tags", tag.id, lang),
            &format!("tag-{}", slug),
            lang,
        )?;
        self.fetch(request).await
    }

    /// Resolve the author slug, then list their posts.
    pub async fn get_posts_by_author_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Vec<Post>, WordPressError> {
        let author = self
            .get_author_by_slug(slug, lang)
            .await?
            .ok_or_else(|| WordPressError::NotFound {
                resource: "author",
                slug: slug.to_string(),
            })?;

        let request = self.scoped_request(
            POSTS_PATH,
            &listing("author", author.id, lang),
            &format!("author-{}", slug),
            lang,
        )?;
        self.fetch(request).await
    }

    /// Polylang translations of a post: language code → post id.
    pub async fn get_post_translations(
        &self,
        post_id: u64,
    ) -> Result<HashMap<String, u64>, WordPressError> {
        let request = self.request(
            &format!("{}/{}", POSTS_PATH, post_id),
            &Query::new().set("_fields", "translations"),
            CacheTags::new([GLOBAL_TAG.to_string(), format!("post-{}-translations", post_id)]),
        )?;
        let response: TranslationsOnly = self.fetch(request).await?;
        Ok(response.translations)
    }

    /// The `target_lang` translation of a post, if one exists.
    pub async fn get_translated_post(
        &self,
        post_id: u64,
        target_lang: &str,
    ) -> Result<Option<Post>, WordPressError> {
        let translations = self.get_post_translations(post_id).await?;
        match translations.get(target_lang) {
            Some(&translated_id) if translated_id != 0 => {
                self.get_post_by_id(translated_id, None).await.map(Some)
            }
            _ => {
                debug!("Post {} has no '{}' translation", post_id, target_lang);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FetchCache;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn setup() -> (MockServer, WordPressClient) {
        let server = MockServer::start().await;
        let client = WordPressClient::with_client(
            reqwest::Client::new(),
            &server.uri(),
            Arc::new(FetchCache::new()),
            Duration::from_secs(3600),
        )
        .unwrap();
        (server, client)
    }

    fn post_json(id: u64, slug: &str) -> serde_json::Value {
        json!({"id": id, "slug": slug, "title": {"rendered": slug}})
    }

    #[tokio::test]
    async fn test_get_all_posts_with_search_and_filters() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .and(query_param("_embed", "true"))
            .and(query_param("per_page", "100"))
            .and(query_param("search", "torte"))
            .and(query_param("author", "2"))
            .and(query_param("tags", "5"))
            .and(query_param("categories", "8"))
            .and(query_param("lang", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(1, "a")])))
            .expect(1)
            .mount(&server)
            .await;

        let filter = PostFilter {
            author: Some("2".to_string()),
            tag: Some("5".to_string()),
            category: Some("8".to_string()),
            search: Some("torte".to_string()),
            lang: Some("en".to_string()),
        };
        let posts = client.get_all_posts(&filter).await.unwrap();
        assert_eq!(posts.len(), 1);

        let url = client.url(POSTS_PATH, &filter.to_query()).unwrap();
        let tags = client.cache().tags_for(url.as_str()).unwrap();
        assert_eq!(tags.as_slice(), ["wordpress", "posts", "posts-en"]);
    }

    #[tokio::test]
    async fn test_get_post_by_slug_found() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .and(query_param("slug", "hello"))
            .and(query_param("lang", "ro"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(3, "hello")])))
            .mount(&server)
            .await;

        let post = client.get_post_by_slug("hello", Some("ro")).await.unwrap();
        assert_eq!(post.map(|p| p.id), Some(3));
    }

    #[tokio::test]
    async fn test_get_post_by_slug_empty_is_none() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let post = client.get_post_by_slug("missing", None).await.unwrap();
        assert!(post.is_none());
    }

    #[tokio::test]
    async fn test_get_post_by_id_error_propagates() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/42", POSTS_PATH)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client.get_post_by_id(42, Some("en")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.url().unwrap().contains("/posts/42?lang=en"));
    }

    #[tokio::test]
    async fn test_get_posts_by_category_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .and(query_param("categories", "8"))
            .and(query_param("_embed", "true"))
            .and(query_param("per_page", "100"))
            .and(query_param("lang", "ru"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(1, "a")])))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client.get_posts_by_category(8, Some("ru")).await.unwrap();
        assert_eq!(posts[0].slug, "a");

        let url = client.url(POSTS_PATH, &listing("categories", 8, Some("ru"))).unwrap();
        let tags = client.cache().tags_for(url.as_str()).unwrap();
        assert_eq!(tags.as_slice(), ["wordpress", "category-8", "category-8-ru"]);
    }

    #[tokio::test]
    async fn test_get_posts_by_tag_and_author_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .and(query_param("tags", "5"))
            .and(query_param("lang", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(2, "b")])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .and(query_param("author", "3"))
            .and(query_param("lang", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                post_json(3, "c"),
                post_json(4, "d")
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let by_tag = client.get_posts_by_tag(5, Some("en")).await.unwrap();
        assert_eq!(by_tag.len(), 1);
        let by_author = client.get_posts_by_author(3, Some("en")).await.unwrap();
        assert_eq!(by_author.len(), 2);

        let url = client.url(POSTS_PATH, &listing("tags", 5, Some("en"))).unwrap();
        let tags = client.cache().tags_for(url.as_str()).unwrap();
        assert_eq!(tags.as_slice(), ["wordpress", "tag-5", "tag-5-en"]);

        let url = client.url(POSTS_PATH, &listing("author", 3, Some("en"))).unwrap();
        let tags = client.cache().tags_for(url.as_str()).unwrap();
        assert_eq!(tags.as_slice(), ["wordpress", "author-3", "author-3-en"]);
    }

    #[tokio::test]
    async fn test_posts_by_author_slug_resolves_then_lists() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/users"))
            .and(query_param("slug", "olesea"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": 9, "name": "Olesea", "slug": "olesea"}])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .and(query_param("author", "9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(1, "a")])))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client.get_posts_by_author_slug("olesea", None).await.unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn test_posts_by_category_slug_unknown_aborts() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = client
            .get_posts_by_category_slug("nope", Some("ru"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WordPressError::NotFound { resource: "category", .. }
        ));
    }

    #[tokio::test]
    async fn test_posts_by_tag_slug_lookup_failure_aborts() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/tags"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(POSTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = client.get_posts_by_tag_slug("cakes", None).await.unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_translated_post() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/5", POSTS_PATH)))
            .and(query_param("_fields", "translations"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"translations": {"ro": 5, "en": 6}})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{}/6", POSTS_PATH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(post_json(6, "hello-en")))
            .mount(&server)
            .await;

        let translated = client.get_translated_post(5, "en").await.unwrap();
        assert_eq!(translated.map(|p| p.slug), Some("hello-en".to_string()));

        let missing = client.get_translated_post(5, "ru").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_post_without_translations_field() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/5", POSTS_PATH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let translations = client.get_post_translations(5).await.unwrap();
        assert!(translations.is_empty());
    }
}
