// Blog pages: posts listing, single post, pages and the not-found view.

use crate::i18n::Locale;
use crate::server::{AppError, AppState};
use crate::wordpress::acf::{Page404Fields, PostsPageLabels};
use crate::wordpress::models::{Author, Category, Page, Post, Tag};
use crate::wordpress::{PostFilter, WordPressClient};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::form_urlencoded;

pub const POSTS_PER_PAGE: usize = 9;
const POSTS_PAGE_SLUG: &str = "posts";
const NOT_FOUND_PAGE_SLUG: &str = "404-page";

/// Query string of the posts listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostsParams {
    pub author: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    pub search: Option<String>,
}

impl PostsParams {
    fn non_empty(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn search(&self) -> Option<&str> {
        Self::non_empty(&self.search)
    }

    /// Requested page, 1-based. Anything unparsable or zero is page 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    fn filter(&self, locale: Locale) -> PostFilter {
        PostFilter {
            author: self.author.clone(),
            tag: self.tag.clone(),
            category: self.category.clone(),
            search: self.search.clone(),
            lang: None,
        }
        .lang(locale.code())
    }

    /// `/{locale}/posts` with the current filters and the given page.
    /// Page 1 is left implicit.
    pub fn page_url(&self, locale: Locale, page: usize) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if page > 1 {
            query.append_pair("page", &page.to_string());
        }
        for (key, value) in [
            ("category", &self.category),
            ("author", &self.author),
            ("tag", &self.tag),
            ("search", &self.search),
        ] {
            if let Some(value) = Self::non_empty(value) {
                query.append_pair(key, value);
            }
        }

        let query = query.finish();
        if query.is_empty() {
            locale.path("/posts")
        } else {
            format!("{}?{}", locale.path("/posts"), query)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
    pub current_url: String,
    /// `None` on the first page.
    pub previous_url: Option<String>,
    /// `None` on the last page.
    pub next_url: Option<String>,
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(POSTS_PER_PAGE)
}

/// Slice of `posts` shown on `page` (1-based); empty past the end.
pub fn page_slice<T>(posts: &[T], page: usize) -> &[T] {
    let start = (page - 1).saturating_mul(POSTS_PER_PAGE).min(posts.len());
    let end = start.saturating_add(POSTS_PER_PAGE).min(posts.len());
    &posts[start..end]
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsView {
    pub locale: Locale,
    pub labels: PostsPageLabels,
    pub posts_found: String,
    pub search: Option<String>,
    pub selected_author: Option<String>,
    pub selected_tag: Option<String>,
    pub selected_category: Option<String>,
    pub total: usize,
    pub posts: Vec<Post>,
    pub authors: Vec<Author>,
    pub tags: Vec<Tag>,
    pub categories: Vec<Category>,
    /// Present only when there is more than one page.
    pub pagination: Option<Pagination>,
}

pub async fn posts(
    State(state): State<AppState>,
    locale: Locale,
    Query(params): Query<PostsParams>,
) -> Result<Json<PostsView>, AppError> {
    let wp = &state.wordpress;
    let lang = Some(locale.code());
    let search = params.search();
    let filter = params.filter(locale);

    let (all_posts, authors, tags, categories, page_content) = tokio::try_join!(
        wp.get_all_posts(&filter),
        async {
            match search {
                Some(term) => wp.search_authors(term, lang).await,
                None => wp.get_all_authors(lang).await,
            }
        },
        async {
            match search {
                Some(term) => wp.search_tags(term, lang).await,
                None => wp.get_all_tags(lang).await,
            }
        },
        async {
            match search {
                Some(term) => wp.search_categories(term, lang).await,
                None => wp.get_all_categories(lang).await,
            }
        },
        wp.get_page_by_slug(POSTS_PAGE_SLUG, lang),
    )?;

    let labels = PostsPageLabels::from_page(page_content.as_ref());
    let total = all_posts.len();

    let mut posts_found = labels.posts_found_text(total);
    if search.is_some() {
        if let Some(matching) = labels.matching_search.as_deref() {
            posts_found.push(' ');
            posts_found.push_str(matching);
        }
    }

    let page = params.page();
    let pages = total_pages(total);
    let pagination = (pages > 1).then(|| Pagination {
        page,
        total_pages: pages,
        current_url: params.page_url(locale, page),
        previous_url: (page > 1).then(|| params.page_url(locale, page - 1)),
        next_url: (page < pages).then(|| params.page_url(locale, page + 1)),
    });

    Ok(Json(PostsView {
        locale,
        posts: page_slice(&all_posts, page).to_vec(),
        labels,
        posts_found,
        search: search.map(str::to_string),
        selected_author: params.author.clone(),
        selected_tag: params.tag.clone(),
        selected_category: params.category.clone(),
        total,
        authors,
        tags,
        categories,
        pagination,
    }))
}

#[derive(Debug, Serialize)]
pub struct PostView {
    pub locale: Locale,
    pub post: Post,
}

pub async fn post(
    State(state): State<AppState>,
    locale: Locale,
    Path((_, slug)): Path<(String, String)>,
) -> Result<Response, AppError> {
    match state.wordpress.get_post_by_slug(&slug, Some(locale.code())).await? {
        Some(post) => Ok(Json(PostView { locale, post }).into_response()),
        None => Ok(not_found_response(&state.wordpress, locale).await),
    }
}

#[derive(Debug, Serialize)]
pub struct PageLink {
    pub id: u64,
    pub title: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct PagesView {
    pub locale: Locale,
    pub pages: Vec<PageLink>,
}

pub async fn pages(
    State(state): State<AppState>,
    locale: Locale,
) -> Result<Json<PagesView>, AppError> {
    let pages = state.wordpress.get_all_pages(Some(locale.code())).await?;
    let pages = pages
        .into_iter()
        .map(|page| PageLink {
            id: page.id,
            href: locale.path(&format!("/pages/{}", page.slug)),
            title: page.title.rendered,
        })
        .collect();

    Ok(Json(PagesView { locale, pages }))
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub locale: Locale,
    pub page: Page,
}

pub async fn page(
    State(state): State<AppState>,
    locale: Locale,
    Path((_, slug)): Path<(String, String)>,
) -> Result<Response, AppError> {
    match state.wordpress.get_page_by_slug(&slug, Some(locale.code())).await? {
        Some(page) => Ok(Json(PageView { locale, page }).into_response()),
        None => Ok(not_found_response(&state.wordpress, locale).await),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundButton {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundView {
    pub locale: Locale,
    pub title: String,
    pub content: String,
    pub show_search_box: bool,
    pub button: Option<NotFoundButton>,
}

impl NotFoundView {
    /// Minimal view used when the CMS page is missing or unreachable.
    pub fn fallback(locale: Locale) -> Self {
        Self {
            locale,
            title: "404".to_string(),
            content: format!("Page not found (Locale: {})", locale),
            show_search_box: false,
            button: None,
        }
    }

    pub fn from_page(locale: Locale, page: &Page) -> Self {
        let fields = Page404Fields::from_page(page);
        let button = match (fields.button_text, fields.button_link) {
            (Some(text), Some(link)) if !text.is_empty() && !link.is_empty() => {
                Some(NotFoundButton { text, link })
            }
            _ => None,
        };

        Self {
            locale,
            title: page.title.rendered.clone(),
            content: page.content.rendered.clone(),
            show_search_box: fields.show_search_box,
            button,
        }
    }
}

/// Not-found view for a locale. Never fails.
pub async fn not_found_view(wp: &WordPressClient, locale: Locale) -> NotFoundView {
    match wp.get_page_by_slug(NOT_FOUND_PAGE_SLUG, Some(locale.code())).await {
        Ok(Some(page)) => NotFoundView::from_page(locale, &page),
        Ok(None) => NotFoundView::fallback(locale),
        Err(e) => {
            warn!("Failed to load the not-found page for {}: {}", locale, e);
            NotFoundView::fallback(locale)
        }
    }
}

async fn not_found_response(wp: &WordPressClient, locale: Locale) -> Response {
    (StatusCode::NOT_FOUND, Json(not_found_view(wp, locale).await)).into_response()
}

/// Fallback for every unmatched path.
pub async fn not_found(State(state): State<AppState>, locale: Option<Locale>) -> Response {
    match locale {
        Some(locale) => not_found_response(&state.wordpress, locale).await,
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
