//! Locale-prefix routing.
//!
//! Every page URL carries its locale as the first path segment. Requests
//! without one are redirected to the default locale; requests with one get
//! a typed [`Locale`] inserted into their extensions for handlers to read.

use crate::i18n::{Locale, LocaleRegistry};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// Path prefixes the router never touches.
const BYPASS_PREFIXES: [&str; 6] = [
    "api",
    "_next/static",
    "_next/image",
    "favicon.ico",
    "sitemap.xml",
    "robots.txt",
];

/// Outcome of classifying a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRoute<'a> {
    /// Redirect (307) to the given location.
    Redirect(String),
    /// The path already starts with this supported locale.
    Localized(&'a str),
}

/// Whether the router should let the path through untouched.
pub fn is_bypassed(path: &str) -> bool {
    let trimmed = path.trim_start_matches('/');
    BYPASS_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Classify a path against the supported locale codes.
///
/// A path has a locale only when it is exactly `/{code}` or starts with
/// `/{code}/`. The query string is kept on prefix-injection redirects.
pub fn resolve<'a>(
    path: &str,
    query: Option<&str>,
    supported: &[&'a str],
    default: &str,
) -> LocaleRoute<'a> {
    if path == "/" || path.is_empty() {
        return LocaleRoute::Redirect(format!("/{}", default));
    }

    let found = supported.iter().copied().find(|code| {
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(*code))
            .map(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(false)
    });

    match found {
        Some(code) => LocaleRoute::Localized(code),
        None => {
            let mut location = format!("/{}{}", default, path);
            if let Some(query) = query.filter(|q| !q.is_empty()) {
                location.push('?');
                location.push_str(query);
            }
            LocaleRoute::Redirect(location)
        }
    }
}

/// Axum middleware applying [`resolve`] with the registry's locales.
pub async fn locale_router(mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if is_bypassed(&path) {
        return next.run(req).await;
    }

    let registry = LocaleRegistry::get();
    let supported = registry.supported_codes();
    let default = registry.default_locale().code;

    let route = resolve(&path, req.uri().query(), &supported, default);
    match route {
        LocaleRoute::Redirect(location) => {
            debug!("Redirecting {} -> {}", path, location);
            Redirect::temporary(&location).into_response()
        }
        LocaleRoute::Localized(code) => match Locale::from_code(code) {
            Ok(locale) => {
                req.extensions_mut().insert(locale);
                next.run(req).await
            }
            Err(_) => Redirect::temporary(&format!("/{}{}", default, path)).into_response(),
        },
    }
}

/// Handlers read the locale the router attached. Requests the router let
/// through untouched have none and are answered with 404.
#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Locale>()
            .copied()
            .ok_or(StatusCode::NOT_FOUND)
    }
}
