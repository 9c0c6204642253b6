//! Navigation chrome: static fallback menus, WordPress menu mapping and the
//! navbar contact split.

use crate::i18n::Locale;
use crate::wordpress::models::MenuItem;
use serde::Serialize;

pub const SITE_NAME: &str = "Delice AlexaDell";
pub const SITE_DESCRIPTION: &str = "Delice AlexaDell, a personal blog by Olesea";
pub const SITE_DOMAIN: &str = "https://www.delice.my";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    pub title: String,
    pub href: String,
}

impl MenuLink {
    fn keyed(key: &str, href: String) -> Self {
        Self {
            title: capitalize(key),
            href,
        }
    }

    fn is_contact(&self) -> bool {
        self.title.to_lowercase().contains("contact") || self.href.to_lowercase().contains("contact")
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn main_menu(locale: Locale) -> Vec<MenuLink> {
    vec![
        MenuLink::keyed("home", locale.path("/")),
        MenuLink::keyed("about", locale.path("/about")),
        MenuLink::keyed("blog", locale.path("/posts")),
        MenuLink::keyed("contact", locale.path("/contact")),
    ]
}

pub fn content_menu(locale: Locale) -> Vec<MenuLink> {
    vec![
        MenuLink::keyed("latest", locale.path("/posts")),
        MenuLink::keyed("categories", locale.path("/categories")),
        MenuLink::keyed("authors", locale.path("/authors")),
        MenuLink::keyed("tags", locale.path("/tags")),
    ]
}

/// Map CMS menu items to links. Absolute paths are kept; anything else is
/// appended to the locale prefix as-is.
pub fn from_wordpress(items: &[MenuItem], locale: Locale) -> Vec<MenuLink> {
    items
        .iter()
        .map(|item| MenuLink {
            title: item.title.clone(),
            href: if item.url.starts_with('/') {
                item.url.clone()
            } else {
                format!("/{}{}", locale.code(), item.url)
            },
        })
        .collect()
}

/// Top navigation, with the first contact-like entry promoted to a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navbar {
    pub items: Vec<MenuLink>,
    pub contact: Option<MenuLink>,
}

impl Navbar {
    /// Uses the CMS menu when it has entries, the static main menu otherwise.
    pub fn build(wp_items: &[MenuItem], locale: Locale) -> Self {
        let mut items = if wp_items.is_empty() {
            main_menu(locale)
        } else {
            from_wordpress(wp_items, locale)
        };

        let contact = items
            .iter()
            .position(MenuLink::is_contact)
            .map(|index| items.remove(index));

        Self { items, contact }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub site_name: &'static str,
    pub site_description: &'static str,
    pub website: Vec<MenuLink>,
    pub blog: Vec<MenuLink>,
}

impl Footer {
    pub fn new(locale: Locale) -> Self {
        Self {
            site_name: SITE_NAME,
            site_description: SITE_DESCRIPTION,
            website: main_menu(locale),
            blog: content_menu(locale),
        }
    }
}
