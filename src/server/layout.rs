use crate::i18n::Locale;
use crate::menu::{Footer, Navbar, SITE_NAME};
use crate::server::AppState;
use crate::strapi::models::Navigation;
use crate::wordpress::models::SiteLanguage;
use axum::{extract::State, Json};
use serde::Serialize;

/// Page chrome shared by every localized page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutView {
    pub locale: Locale,
    pub site_name: &'static str,
    pub navbar: Navbar,
    pub footer: Footer,
    pub languages: Vec<SiteLanguage>,
    /// Site-section navigation from Strapi, when available.
    pub site_navigation: Option<Navigation>,
}

pub async fn navigation(State(state): State<AppState>, locale: Locale) -> Json<LayoutView> {
    let (menu, languages, site_navigation) = tokio::join!(
        state.wordpress.get_menu_by_language(locale.code()),
        state.wordpress.get_available_languages(),
        state.strapi.get_navigation(),
    );

    Json(LayoutView {
        locale,
        site_name: SITE_NAME,
        navbar: Navbar::build(&menu, locale),
        footer: Footer::new(locale),
        languages,
        site_navigation,
    })
}
