//! Internationalization (i18n): the site's locales and locale-prefix routing.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and the default
//! - `locale`: Validated `Locale` type passed explicitly to content clients
//! - `router`: Path classification and the axum middleware built on it
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Locale, LocaleRoute};
//!
//! let locale = Locale::from_code("ru")?;
//! assert_eq!(locale.path("/posts"), "/ru/posts");
//! ```

mod locale;
mod registry;
pub mod router;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use router::{locale_router, LocaleRoute};
