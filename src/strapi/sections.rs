use crate::strapi::client::Section;
use crate::strapi::models::{
    AboutSection, ContactSection, FaqSection, HeroSection, Navigation, ProductsSection, Service,
};
use crate::strapi::StrapiClient;
use serde::de::DeserializeOwned;
use tracing::error;

impl StrapiClient {
    /// Fetch a section, logging and swallowing any failure.
    async fn section<T: DeserializeOwned>(&self, section: Section) -> Option<T> {
        match self.fetch_section(section).await {
            Ok(data) => Some(data),
            Err(e) => {
                error!("Error fetching {} from Strapi: {}", section, e);
                None
            }
        }
    }

    pub async fn get_hero_section(&self) -> Option<HeroSection> {
        self.section(Section::Hero).await
    }

    pub async fn get_products_section_content(&self) -> Option<ProductsSection> {
        self.section(Section::Products).await
    }

    pub async fn get_about_section(&self) -> Option<AboutSection> {
        self.section(Section::About).await
    }

    pub async fn get_contact_section(&self) -> Option<ContactSection> {
        self.section(Section::Contact).await
    }

    pub async fn get_faq_section(&self) -> Option<FaqSection> {
        self.section(Section::Faq).await
    }

    pub async fn get_navigation(&self) -> Option<Navigation> {
        self.section(Section::Navigation).await
    }

    /// Active services in ascending `order`; empty on any failure.
    pub async fn get_services(&self) -> Vec<Service> {
        let services: Vec<Service> = self.section(Section::Services).await.unwrap_or_default();
        active_in_order(services)
    }
}

pub(crate) fn active_in_order(services: Vec<Service>) -> Vec<Service> {
    let mut active: Vec<Service> = services.into_iter().filter(|s| s.is_active).collect();
    active.sort_by_key(|s| s.order);
    active
}
