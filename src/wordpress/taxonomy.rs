use crate::cache::CacheTags;
use crate::wordpress::client::GLOBAL_TAG;
use crate::wordpress::models::{Category, Tag};
use crate::wordpress::query::Query;
use crate::wordpress::{WordPressClient, WordPressError};

const CATEGORIES_PATH: &str = "/wp-json/wp/v2/categories";
const TAGS_PATH: &str = "/wp-json/wp/v2/tags";

pub(crate) fn search_query(term: &str, lang: Option<&str>) -> Query {
    Query::new()
        .set("search", term)
        .set("per_page", 100)
        .lang(lang)
}

impl WordPressClient {
    // ── Categories ───────────────────────────────────────────────────

    pub async fn get_all_categories(&self, lang: Option<&str>) -> Result<Vec<Category>, WordPressError> {
        let query = Query::new().set("per_page", 100).lang(lang);
        let request = self.scoped_request(CATEGORIES_PATH, &query, "categories", lang)?;
        self.fetch(request).await
    }

    pub async fn get_category_by_id(
        &self,
        id: u64,
        lang: Option<&str>,
    ) -> Result<Category, WordPressError> {
        let request = self.scoped_request(
            &format!("{}/{}", CATEGORIES_PATH, id),
            &Query::new().lang(lang),
            &format!("category-{}", id),
            lang,
        )?;
        self.fetch(request).await
    }

    pub async fn get_category_by_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Option<Category>, WordPressError> {
        let request = self.scoped_request(
            CATEGORIES_PATH,
            &Query::new().set("slug", slug).lang(lang),
            &format!("category-{}", slug),
            lang,
        )?;
        self.fetch_first(request).await
    }

    pub async fn search_categories(
        &self,
        term: &str,
        lang: Option<&str>,
    ) -> Result<Vec<Category>, WordPressError> {
        let request = self.request(
            CATEGORIES_PATH,
            &search_query(term, lang),
            CacheTags::new([GLOBAL_TAG]),
        )?;
        self.fetch(request).await
    }

    // ── Tags ─────────────────────────────────────────────────────────

    pub async fn get_all_tags(&self, lang: Option<&str>) -> Result<Vec<Tag>, WordPressError> {
        let query = Query::new().set("per_page", 100).lang(lang);
        let request = self.scoped_request(TAGS_PATH, &query, "tags", lang)?;
        self.fetch(request).await
    }

    pub async fn get_tag_by_id(&self, id: u64, lang: Option<&str>) -> Result<Tag, WordPressError> {
        let request = self.scoped_request(
            &format!("{}/{}", TAGS_PATH, id),
            &Query::new().lang(lang),
            &format!("tag-{}", id),
            lang,
        )?;
        self.fetch(request).await
    }

    pub async fn get_tag_by_slug(
        &self,
        slug: &str,
        lang: Option<&str>,
    ) -> Result<Option<Tag>, WordPressError> {
        let request = self.scoped_request(
            TAGS_PATH,
            &Query::new().set("slug", slug).lang(lang),
            &format!("tag-{}", slug),
            lang,
        )?;
        self.fetch_first(request).await
    }

    /// Tags attached to one post.
    pub async fn get_tags_by_post(
        &self,
        post_id: u64,
        lang: Option<&str>,
    ) -> Result<Vec<Tag>, WordPressError> {
        let request = self.scoped_request(
            TAGS_PATH,
            &Query::new().set("post", post_id).lang(lang),
            &format!("post-{}", post_id),
            lang,
        )?;
        self.fetch(request).await
    }

    pub async fn search_tags(&self, term: &str, lang: Option<&str>) -> Result<Vec<Tag>, WordPressError> {
        let request = self.request(TAGS_PATH, &search_query(term, lang), CacheTags::new([GLOBAL_TAG]))?;
        self.fetch(request).await
    }
}
