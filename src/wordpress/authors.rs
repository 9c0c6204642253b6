use crate::cache::CacheTags;
use crate::wordpress::client::GLOBAL_TAG;
use crate::wordpress::models::Author;
use crate::wordpress::query::Query;
use crate::wordpress::taxonomy::search_query;
use crate::wordpress::{WordPressClient, WordPressError};

const USERS_PATH: &str = "/wp-json/wp/v2/users";

impl WordPressClient {
    pub async fn get_all_authors(&self, lang: Option<&str>) -> Result<Vec<Author>, WordPressError> {
        let query = Query::new().set("per_page", 100).lang(lang);
        let request = self.scoped_request(USERS_PATH, &query, "authors", lang)?;
        self.fetch(request).await
    }

    pub async fn get_author_by_id(
        &self,
        id: u64,
        lang: Option<&str>,
    ) -> Result<Author, WordPressError> {
        let request = self.scoped_request(
            &format!("{}/{}", USERS_PATH, id),
            &Query::new().lang(lang),
            &format!("author-{}", id),
            lang,
        )?;
        self.fetch(request).await
    }

    pub async fn get_author_by_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Option<Author>, WordPressError> {
        let request = self.scoped_request(
            USERS_PATH,
            &Query::new().set("slug", slug).lang(lang),
            &format!("author-{}", slug),
            lang,
        )?;
        self.fetch_first(request).await
    }

    pub async fn search_authors(
        &self,
        term: &str,
        lang: Option<&str>,
    ) -> Result<Vec<Author>, WordPressError> {
        let request = self.request(USERS_PATH, &search_query(term, lang), CacheTags::new([GLOBAL_TAG]))?;
        self.fetch(request).await
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
    async fn test_get_all_authors() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 2,
                    "name": "Alexa",
                    "slug": "alexa",
                    "avatar_urls": {"96": "https://cms.example.com/a.png"}
                }
            ])))
            .mount(&server)
            .await;

        let authors = client.get_all_authors(None).await.unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(
            authors[0].avatar_urls.get("96").map(String::as_str),
            Some("https://cms.example.com/a.png")
        );
    }

    #[tokio::test]
    async fn test_get_author_by_id() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/2", USERS_PATH)))
            .and(query_param("lang", "ro"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": 2, "name": "Alexa", "slug": "alexa"}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let author = client.get_author_by_id(2, Some("ro")).await.unwrap();
        assert_eq!(author.name, "Alexa");

        let url = client
            .url(&format!("{}/2", USERS_PATH), &Query::new().lang(Some("ro")))
            .unwrap();
        let tags = client.cache().tags_for(url.as_str()).unwrap();
        assert_eq!(tags.as_slice(), ["wordpress", "author-2", "author-2-ro"]);
    }

    #[tokio::test]
    async fn test_get_author_by_slug() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .and(query_param("slug", "alexa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "name": "Alexa", "slug": "alexa"}
            ])))
            .mount(&server)
            .await;

        let author = client.get_author_by_slug("alexa", Some("en")).await.unwrap();
        assert_eq!(author.map(|a| a.id), Some(2));
    }

    #[tokio::test]
    async fn test_search_authors() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .and(query_param("search", "ale"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client.search_authors("ale", None).await.unwrap().is_empty());
    }
}
