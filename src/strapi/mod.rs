//! Strapi client for the single-page site sections.
//!
//! Unlike [`crate::wordpress`], section getters never fail: errors are
//! logged and surface as `None` or an empty list.

mod client;
mod error;
pub mod models;
mod sections;
mod submissions;

pub use client::{Populate, Section, StrapiClient, GLOBAL_TAG};
pub use error::StrapiError;
pub use submissions::DEFAULT_SUBJECT;
