//! Locale type: a validated site locale.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::Serialize;

/// A locale that has been validated against the registry.
///
/// Handlers receive one of these from the locale router and pass its code
/// explicitly into every content-fetch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ROMANIAN: Locale = Locale { code: "ro" };
    pub const RUSSIAN: Locale = Locale { code: "ru" };
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is known and enabled
    /// * `Err` if the code is unknown or disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The locale bare paths are redirected to.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Prefix a site-relative path with this locale (`/about` → `/ro/about`).
    pub fn path(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            format!("/{}", self.code)
        } else if path.starts_with('/') {
            format!("/{}{}", self.code, path)
        } else {
            format!("/{}/{}", self.code, path)
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
