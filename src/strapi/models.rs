//! Strapi v5 section and collection records (flattened attributes).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Strapi sends `null` for unset attributes; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ "data": ..., "meta": ... }` wrapper around every response.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Button {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualPlaceholder {
    pub id: u64,
    pub brand_name: Option<String>,
    pub brand_tagline: Option<String>,
    pub show_floating_elements: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub alternative_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tagline_highlight: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_button: Button,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_button: Button,
    pub visual_element: Option<VisualPlaceholder>,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductsSection {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub highlighted_word: String,
    /// Rich-text blocks, passed through untouched.
    #[serde(deserialize_with = "null_as_default")]
    pub description: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutSection {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_highlight: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_middle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_bottom: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_duration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_url: String,
    pub video_thumbnail: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Vec<Stat>,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_button_text: String,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessHours {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(deserialize_with = "null_as_default")]
    pub open_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub close_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_closed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_line1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_line2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub document_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_highlight: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(deserialize_with = "null_as_default")]
    pub form_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_name_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_name_placeholder: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_email_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_email_placeholder: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_phone_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_phone_placeholder: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_subject_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_subject_placeholder: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_message_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_message_placeholder: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_submit_button: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_submitting_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_success_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_error_message: String,

    #[serde(deserialize_with = "null_as_default")]
    pub info_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub info_subtitle: String,

    #[serde(deserialize_with = "null_as_default")]
    pub phone_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_availability: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email_response_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_line1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_line2: String,

    #[serde(deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
    #[serde(deserialize_with = "null_as_default")]
    pub business_hours: Vec<BusinessHours>,
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,

    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqSection {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_highlight: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub show_category_filter: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub all_category_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_button1_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_button1_action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_button2_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_button2_action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub faq_items: Vec<FaqItem>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationItem {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButton {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// `primary` or `secondary`
    #[serde(deserialize_with = "null_as_default")]
    pub variant: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Navigation {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub navbar: Vec<NavigationItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub footer: Vec<NavigationItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub cta_buttons: Vec<CtaButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub accent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
}

/// Inbound contact-form payload.
///
/// Fields are optional at the type level so that missing values can be
/// reported as a 400 instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Record stored in the `contact-submissions` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status_email: String,
    pub submitted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hero_section_from_camel_case() {
        let hero: HeroSection = serde_json::from_value(json!({
            "id": 1,
            "documentId": "abc",
            "firstName": "Alexa",
            "lastName": "Dell",
            "tagline": "Sweet",
            "taglineHighlight": "things",
            "description": "Desserts",
            "primaryButton": {"id": 1, "text": "Order", "href": "#contact"},
            "secondaryButton": {"id": 2, "text": "Menu"}
        }))
        .unwrap();

        assert_eq!(hero.first_name, "Alexa");
        assert_eq!(hero.primary_button.href.as_deref(), Some("#contact"));
        assert!(hero.secondary_button.href.is_none());
        assert!(hero.image.is_none());
    }

    #[test]
    fn test_contact_section_relations_default_empty() {
        let contact: ContactSection = serde_json::from_value(json!({
            "id": 1, "title": "Contact", "formNameLabel": "Name"
        }))
        .unwrap();
        assert_eq!(contact.form_name_label, "Name");
        assert!(contact.social_links.is_empty());
        assert!(contact.locations.is_empty());
    }

    #[test]
    fn test_null_attributes_decode_as_defaults() {
        let contact: ContactSection = serde_json::from_value(json!({
            "id": 1,
            "title": "Contact",
            "phone": null,
            "addressLine2": null,
            "socialLinks": null,
            "locations": [{"id": 1, "name": "Shop", "addressLine2": null, "isPrimary": null}],
            "locale": null
        }))
        .unwrap();
        assert_eq!(contact.phone, "");
        assert!(contact.social_links.is_empty());
        assert_eq!(contact.locations[0].address_line2, "");
        assert!(!contact.locations[0].is_primary);
        assert!(contact.locale.is_none());

        let hero: HeroSection = serde_json::from_value(json!({
            "id": 1, "tagline": null, "primaryButton": null, "secondaryButton": {"id": 2, "text": null}
        }))
        .unwrap();
        assert_eq!(hero.tagline, "");
        assert_eq!(hero.primary_button, Button::default());
        assert_eq!(hero.secondary_button.text, "");
    }

    #[test]
    fn test_faq_items() {
        let faq: FaqSection = serde_json::from_value(json!({
            "id": 1,
            "showCategoryFilter": true,
            "ctaButton1Text": "Call",
            "faqItems": [{"id": 1, "question": "Q?", "answer": "A", "category": "general", "order": 1}]
        }))
        .unwrap();
        assert!(faq.show_category_filter);
        assert_eq!(faq.cta_button1_text, "Call");
        assert_eq!(faq.faq_items[0].question, "Q?");
    }

    #[test]
    fn test_submission_record_serializes_camel_case() {
        let record = SubmissionRecord {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            subject: "General Inquiry".to_string(),
            message: "Hi".to_string(),
            status_email: "new".to_string(),
            submitted_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["statusEmail"], "new");
        assert_eq!(value["submittedAt"], "2024-01-01T00:00:00.000Z");
    }
}
