//! Localized blog and single-page site for Delice AlexaDell.
//!
//! Content comes from two headless CMS backends: WordPress for the blog and
//! Strapi for the home-page sections. The [`server`] module exposes them as
//! locale-prefixed JSON routes.

pub mod cache;
pub mod config;
pub mod i18n;
pub mod menu;
pub mod security;
pub mod server;
pub mod strapi;
pub mod wordpress;
