//! Locale registry: Single source of truth for the site's locales.
//!
//! Uses a `OnceLock` singleton so the router, the handlers and the menu
//! builder all agree on the same fixed set and the same default.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Two-letter code used in URLs and as the WordPress `lang` filter
    pub code: &'static str,

    /// English name of the language (e.g., "Romanian")
    pub name: &'static str,

    /// Native name of the language (e.g., "Română")
    pub native_name: &'static str,

    /// Whether bare paths are redirected to this locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale is accepted as a URL prefix
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Codes of all enabled locales, in registry order.
    pub fn supported_codes(&self) -> Vec<&'static str> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .map(|locale| locale.code)
            .collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one default locale.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "ro",
            name: "Romanian",
            native_name: "Română",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}
