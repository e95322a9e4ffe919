//! `check` command: validate and summarize.

use anyhow::Result;
use lumen_config::config::SiteConfig;
use lumen_config::log;

use super::{Cli, common};

/// Load the config and print a one-line summary.
///
/// Validation failures propagate as the error, listing every bad field.
pub fn check_config(cli: &Cli) -> Result<()> {
    let site = common::load_site(cli)?;
    log!("check"; "{}", summarize(&site));
    Ok(())
}

/// `'Title' at url: 2 menu items, 4 posts per page, contacts: twitter, github`
fn summarize(site: &SiteConfig) -> String {
    let contacts: Vec<&str> = site
        .author
        .contacts
        .present()
        .map(|(platform, _)| platform.key())
        .collect();
    let contacts = if contacts.is_empty() {
        "none".to_string()
    } else {
        contacts.join(", ")
    };

    let mut features = Vec::new();
    if site.comments_enabled() {
        features.push("comments");
    }
    if site.analytics_enabled() {
        features.push("analytics");
    }
    if site.use_katex {
        features.push("katex");
    }

    let mut summary = format!(
        "'{}' at {}: {} menu item{}, {} post{} per page, contacts: {}",
        site.title,
        site.page_url(""),
        site.menu.len(),
        common::plural_s(site.menu.len()),
        site.posts_per_page,
        common::plural_s(site.page_size()),
        contacts,
    );
    if !features.is_empty() {
        summary.push_str(&format!(", enabled: {}", features.join(", ")));
    }
    summary
}
