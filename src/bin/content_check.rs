//! Content check binary - probes both CMS backends and prints what a locale
//! would render, without starting the server
//!
//! Usage:
//!   cargo run --bin content-check              # Check the default locale
//!   cargo run --bin content-check -- en        # Check a specific locale
//!   cargo run --bin content-check -- en --json # Dump the raw records
//!
//! Required environment variables:
//! - WORDPRESS_URL
//!
//! Optional:
//! - NEXT_PUBLIC_STRAPI_URL (defaults to http://localhost:1339)
//! - STRAPI_API_TOKEN

use anyhow::{Context, Result};
use delice_site::config::Config;
use delice_site::i18n::Locale;
use delice_site::menu::Navbar;
use delice_site::server::AppState;
use delice_site::wordpress::PostFilter;
use serde_json::json;
use tracing::info;

fn mark(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "MISSING"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delice_site=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|arg| arg == "--json");
    let locale = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(code) => Locale::from_code(code)?,
        None => Locale::default_locale(),
    };

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let state = AppState::new(config)?;
    let wp = &state.wordpress;
    let strapi = &state.strapi;
    let lang = Some(locale.code());
    let filter = PostFilter::default().lang(locale.code());

    info!("Checking WordPress at {} ({})", wp.base_url(), locale);
    let (posts, categories, tags, authors, pages) = tokio::try_join!(
        wp.get_all_posts(&filter),
        wp.get_all_categories(lang),
        wp.get_all_tags(lang),
        wp.get_all_authors(lang),
        wp.get_all_pages(lang),
    )
    .context("WordPress check failed")?;
    let (menu, languages) = tokio::join!(
        wp.get_menu_by_language(locale.code()),
        wp.get_available_languages()
    );

    info!("Checking Strapi at {}", strapi.base_url());
    let (services, hero, products, about, contact, faq, navigation) = tokio::join!(
        strapi.get_services(),
        strapi.get_hero_section(),
        strapi.get_products_section_content(),
        strapi.get_about_section(),
        strapi.get_contact_section(),
        strapi.get_faq_section(),
        strapi.get_navigation(),
    );

    if as_json {
        let dump = json!({
            "locale": locale,
            "wordpress": {
                "posts": posts,
                "categories": categories,
                "tags": tags,
                "authors": authors,
                "pages": pages,
                "menu": menu,
                "languages": languages,
            },
            "strapi": {
                "services": services,
                "hero": hero,
                "products": products,
                "about": about,
                "contact": contact,
                "faq": faq,
                "navigation": navigation,
            },
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let navbar = Navbar::build(&menu, locale);

    println!(
        "\n========== WORDPRESS: {} / {} ({}) ==========",
        locale.name(),
        locale.native_name(),
        locale
    );
    println!("Posts:      {}", posts.len());
    println!("Categories: {}", categories.len());
    println!("Tags:       {}", tags.len());
    println!("Authors:    {}", authors.len());
    println!("Pages:      {}", pages.len());
    println!(
        "Menu:       {} ({} items)",
        if menu.is_empty() { "static fallback" } else { "cms" },
        navbar.items.len()
    );
    println!(
        "Languages:  {}",
        languages
            .iter()
            .map(|l| l.code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("\n========== STRAPI ==========");
    println!("Hero:       {}", mark(hero.is_some()));
    println!("Products:   {}", mark(products.is_some()));
    println!("About:      {}", mark(about.is_some()));
    println!("Contact:    {}", mark(contact.is_some()));
    println!("FAQ:        {}", mark(faq.is_some()));
    println!("Navigation: {}", mark(navigation.is_some()));
    println!("Services:   {} active", services.len());
    println!("============================\n");

    Ok(())
}
