//! Typed views over ACF fields attached to content-driven pages.

use crate::wordpress::models::Page;
use serde::{Deserialize, Serialize};

const DEFAULT_POSTS_FOUND_FORMAT: &str = "{count} {posts} found";

/// Fields of the `404-page` page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page404Fields {
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
    #[serde(default)]
    pub show_search_box: bool,
}

impl Page404Fields {
    pub fn from_page(page: &Page) -> Self {
        page.acf()
    }
}

/// Raw ACF fields of the `posts` page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostsPageAcf {
    pub page_title: Option<String>,
    pub page_subtitle: Option<String>,
    pub all_tags_label: Option<String>,
    pub all_categories_label: Option<String>,
    pub all_authors_label: Option<String>,
    pub reset_filters_label: Option<String>,
    pub search_placeholder: Option<String>,
    pub posts_found_text: Option<String>,
    pub posts_found_plural_text: Option<String>,
    pub posts_found_format: Option<String>,
    pub matching_search_text: Option<String>,
    pub no_posts_found_text: Option<String>,
    pub previous_page_label: Option<String>,
    pub next_page_label: Option<String>,
}

/// Labels for the posts listing, with the facet labels always filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsPageLabels {
    pub page_title: Option<String>,
    pub page_subtitle: Option<String>,
    pub all_tags: String,
    pub all_categories: String,
    pub all_authors: String,
    pub reset_filters: String,
    pub search_placeholder: Option<String>,
    pub posts_found: Option<String>,
    pub posts_found_plural: Option<String>,
    pub posts_found_format: Option<String>,
    pub matching_search: Option<String>,
    pub no_posts_found: Option<String>,
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    non_empty(value).unwrap_or_else(|| fallback.to_string())
}

impl From<PostsPageAcf> for PostsPageLabels {
    fn from(acf: PostsPageAcf) -> Self {
        Self {
            page_title: acf.page_title,
            page_subtitle: non_empty(acf.page_subtitle),
            all_tags: or_default(acf.all_tags_label, "All Tags"),
            all_categories: or_default(acf.all_categories_label, "All Categories"),
            all_authors: or_default(acf.all_authors_label, "All Authors"),
            reset_filters: or_default(acf.reset_filters_label, "Reset Filters"),
            search_placeholder: acf.search_placeholder,
            posts_found: acf.posts_found_text,
            posts_found_plural: acf.posts_found_plural_text,
            posts_found_format: acf.posts_found_format,
            matching_search: acf.matching_search_text,
            no_posts_found: acf.no_posts_found_text,
            previous_page: acf.previous_page_label,
            next_page: acf.next_page_label,
        }
    }
}

impl PostsPageLabels {
    /// Labels for a (possibly missing) `posts` page.
    pub fn from_page(page: Option<&Page>) -> Self {
        page.map(|p| p.acf::<PostsPageAcf>())
            .unwrap_or_default()
            .into()
    }

    /// "{count} {posts} found" with the singular noun for exactly one post.
    /// Each placeholder is substituted once.
    pub fn posts_found_text(&self, count: usize) -> String {
        let noun = if count == 1 {
            self.posts_found.as_deref()
        } else {
            self.posts_found_plural.as_deref()
        };
        let format = self
            .posts_found_format
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_POSTS_FOUND_FORMAT);

        format
            .replacen("{count}", &count.to_string(), 1)
            .replacen("{posts}", noun.unwrap_or(""), 1)
    }
}
