use std::collections::BTreeMap;

/// REST query parameters, serialized in key order so that the same inputs
/// always produce the same URL (and therefore the same cache key).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(BTreeMap<&'static str, String>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.insert(key, value.to_string());
        self
    }

    /// Set `key` only when `value` is present and non-empty.
    pub fn set_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn lang(self, lang: Option<&str>) -> Self {
        self.set_opt("lang", lang)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Filters accepted by the posts listing.
///
/// Ids are kept as strings because they arrive straight from the page's
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub author: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub lang: Option<String>,
}

impl PostFilter {
    pub fn lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    /// Query for `/wp/v2/posts`. Filters combine with `search`; they never
    /// replace it.
    pub fn to_query(&self) -> Query {
        Query::new()
            .set("_embed", true)
            .set("per_page", 100)
            .lang(self.lang.as_deref())
            .set_opt("search", self.search.as_deref())
            .set_opt("author", self.author.as_deref())
            .set_opt("tags", self.tag.as_deref())
            .set_opt("categories", self.category.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_sorted_by_key() {
        let query = Query::new().set("slug", "a").set("lang", "en").set("_embed", true);
        let keys: Vec<_> = query.pairs().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["_embed", "lang", "slug"]);
    }

    #[test]
    fn test_set_opt_skips_empty() {
        let query = Query::new().set_opt("search", Some("")).lang(None);
        assert!(query.is_empty());
    }

    #[test]
    fn test_post_filter_defaults() {
        let query = PostFilter::default().to_query();
        assert_eq!(query.get("_embed"), Some("true"));
        assert_eq!(query.get("per_page"), Some("100"));
        assert_eq!(query.get("lang"), None);
        assert_eq!(query.get("search"), None);
    }

    #[test]
    fn test_search_is_combined_with_filters() {
        let filter = PostFilter {
            author: Some("2".to_string()),
            tag: Some("5".to_string()),
            category: Some("8".to_string()),
            search: Some("cake".to_string()),
            lang: Some("ru".to_string()),
        };
        let query = filter.to_query();

        assert_eq!(query.get("search"), Some("cake"));
        assert_eq!(query.get("author"), Some("2"));
        assert_eq!(query.get("tags"), Some("5"));
        assert_eq!(query.get("categories"), Some("8"));
        assert_eq!(query.get("lang"), Some("ru"));
    }

    #[test]
    fn test_filters_without_search() {
        let filter = PostFilter {
            tag: Some("5".to_string()),
            ..Default::default()
        }
        .lang("en");
        let query = filter.to_query();

        assert_eq!(query.get("tags"), Some("5"));
        assert_eq!(query.get("search"), None);
        assert_eq!(query.get("lang"), Some("en"));
    }
}
