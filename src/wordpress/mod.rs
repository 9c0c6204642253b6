//! WordPress REST client for the localized blog.
//!
//! Every read takes an optional Polylang language code and propagates
//! failures as [`WordPressError`]. The only lenient calls are the language
//! list and the menu, which are page chrome.

pub mod acf;
mod authors;
mod client;
mod error;
pub mod models;
mod pages;
mod posts;
mod query;
mod site;
mod taxonomy;

pub use client::{ContentRequest, WordPressClient, GLOBAL_TAG};
pub use error::WordPressError;
pub use query::{PostFilter, Query};
