use crate::i18n::Locale;
use crate::server::AppState;
use crate::strapi::models::{
    AboutSection, ContactSection, FaqSection, HeroSection, ProductsSection, Service,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

pub const HOME_ERROR_MESSAGE: &str = "Error loading content";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub locale: Locale,
    pub services: Vec<Service>,
    pub hero: HeroSection,
    pub products: ProductsSection,
    pub about: AboutSection,
    pub contact: ContactSection,
    pub faq: FaqSection,
}

/// Every section is required; services may be empty.
pub async fn home(State(state): State<AppState>, locale: Locale) -> Response {
    let strapi = &state.strapi;
    let (services, hero, products, about, contact, faq) = tokio::join!(
        strapi.get_services(),
        strapi.get_hero_section(),
        strapi.get_products_section_content(),
        strapi.get_about_section(),
        strapi.get_contact_section(),
        strapi.get_faq_section(),
    );

    match (hero, products, about, contact, faq) {
        (Some(hero), Some(products), Some(about), Some(contact), Some(faq)) => Json(HomeView {
            locale,
            services,
            hero,
            products,
            about,
            contact,
            faq,
        })
        .into_response(),
        _ => {
            warn!("Home page rendered without content: a Strapi section is unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "error": HOME_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServicesView {
    pub locale: Locale,
    pub services: Vec<Service>,
}

pub async fn services(State(state): State<AppState>, locale: Locale) -> Json<ServicesView> {
    Json(ServicesView {
        locale,
        services: state.strapi.get_services().await,
    })
}
