use crate::wordpress::models::Page;
use crate::wordpress::query::Query;
use crate::wordpress::{WordPressClient, WordPressError};

const PAGES_PATH: &str = "/wp-json/wp/v2/pages";

/// Projection requested for slug lookups; keeps ACF payloads small.
const PAGE_FIELDS: &str = "id,title,content,excerpt,slug,acf,lang,translations";

impl WordPressClient {
    pub async fn get_all_pages(&self, lang: Option<&str>) -> Result<Vec<Page>, WordPressError> {
        let request = self.scoped_request(PAGES_PATH, &Query::new().lang(lang), "pages", lang)?;
        self.fetch(request).await
    }

    pub async fn get_page_by_id(&self, id: u64, lang: Option<&str>) -> Result<Page, WordPressError> {
        let request = self.scoped_request(
            &format!("{}/{}", PAGES_PATH, id),
            &Query::new().lang(lang),
            &format!("page-{}", id),
            lang,
        )?;
        self.fetch(request).await
    }

    /// Page lookup used for content-driven views such as `posts` and
    /// `404-page`. ACF values come back formatted.
    pub async fn get_page_by_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Option<Page>, WordPressError> {
        let query = Query::new()
            .set("slug", slug)
            .set("acf_format", "standard")
            .set("_fields", PAGE_FIELDS)
            .lang(lang);
        let request = self.scoped_request(PAGES_PATH, &query, &format!("page-{}", slug), lang)?;
        self.fetch_first(request).await
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

    #[tokio::test]
    async fn test_get_page_by_slug_requests_acf_projection() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(PAGES_PATH))
            .and(query_param("slug", "404-page"))
            .and(query_param("acf_format", "standard"))
            .and(query_param("_fields", PAGE_FIELDS))
            .and(query_param("lang", "ru"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 40,
                "slug": "404-page",
                "title": {"rendered": "Не найдено"},
                "acf": {"button_text": "Домой"}
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let page = client
            .get_page_by_slug("404-page", Some("ru"))
            .await
            .unwrap()
            .expect("page exists");
        assert_eq!(page.id, 40);
        assert_eq!(page.title.rendered, "Не найдено");
        assert!(page.acf.is_some());
    }

    #[tokio::test]
    async fn test_get_page_by_slug_empty_is_none() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(PAGES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        assert!(client.get_page_by_slug("posts", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_page_by_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/5", PAGES_PATH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 5, "slug": "about", "menu_order": 2
            })))
            .mount(&server)
            .await;

        let page = client.get_page_by_id(5, None).await.unwrap();
        assert_eq!(page.slug, "about");
        assert_eq!(page.menu_order, 2);
    }

    #[tokio::test]
    async fn test_get_all_pages_error() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(PAGES_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client.get_all_pages(Some("en")).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
