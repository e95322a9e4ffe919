//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{
    extract_doc_comment, get_custom_name, get_default_value, get_serde_rename, has_attr,
};
use crate::config::types::apply_rename_all;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: bool,
    pub default: Option<String>,
    pub skip: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    ///
    /// `rename_all` is the container's serde casing rule, applied unless the
    /// field carries its own `name`/`rename`.
    pub fn from_field(field: &syn::Field, rename_all: Option<&str>) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let raw = ident.to_string();
        let raw = raw.strip_prefix("r#").unwrap_or(&raw);
        let toml_name = get_custom_name(attrs)
            .or_else(|| get_serde_rename(attrs))
            .unwrap_or_else(|| apply_rename_all(raw, rename_all));

        Some(Self {
            name: ident.clone(),
            toml_name,
            doc: extract_doc_comment(attrs),
            inline_doc: has_attr(attrs, "inline_doc"),
            default: get_default_value(attrs),
            skip: has_attr(attrs, "skip"),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }

    /// Full dotted path of this field within `section`.
    pub fn full_path(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{}.{}", section, self.toml_name)
        }
    }
}
