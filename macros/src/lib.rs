//! Proc macros for lumen-config.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[serde(rename_all = "camelCase")]
//! #[config(section = "author")]
//! /// Author profile shown in the sidebar.
//! pub struct AuthorConfig {
//!     /// Author display name.
//!     #[config(default = "Jane Doe")]
//!     pub name: String,
//!
//!     /// Social handles.
//!     #[config(sub)]
//!     pub contacts: ContactsConfig,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - AuthorConfig::FIELDS.name -> FieldPath("author.name")
//! // - AuthorConfig::template() -> TOML string with comments
//! // - AuthorConfig::template_with_header() -> with [author] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//! - `#[config(array)]` - section is an array of tables (`[[path]]`)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Value written into the template
//! - `#[config(inline_doc)]` - Put a one-line doc after the value
//! - `#[config(sub)]` - Nested section (or `Vec` of array sections)
//!
//! `#[serde(rename_all = "...")]` and `#[serde(rename = "...")]` are honored
//! so field paths match the keys users actually write.
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `AuthorConfig` → `author`
//! - `MenuItemConfig` → `menu_item`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
