//! Type and naming helpers for Config derive macro.

use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Element type of a `Vec<T>` field, if the field is one.
pub fn vec_element(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let last = path.path.segments.last()?;
    if last.ident != "Vec" {
        return None;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .or_else(|| name.strip_suffix("Settings"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Apply a serde `rename_all` rule to a snake_case field identifier.
///
/// Only the rules used by config structs are supported; anything else
/// leaves the name untouched.
pub fn apply_rename_all(field: &str, rule: Option<&str>) -> String {
    match rule {
        Some("camelCase") => {
            let mut out = String::new();
            let mut upper = false;
            for c in field.chars() {
                if c == '_' {
                    upper = true;
                } else if upper {
                    out.push(c.to_ascii_uppercase());
                    upper = false;
                } else {
                    out.push(c);
                }
            }
            out
        }
        Some("kebab-case") => field.replace('_', "-"),
        Some("lowercase") => field.to_ascii_lowercase(),
        _ => field.to_string(),
    }
}

/// Format default value based on field type
/// String/PathBuf/enum types get quoted, others are used as-is
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    match ty {
        "String" | "PathBuf" => format!("{:?}", value),
        "bool" | "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64"
        | "isize" | "f32" | "f64" => value.to_string(),
        _ if ty.starts_with("Vec<") => value.to_string(),
        _ => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_rename() {
        assert_eq!(apply_rename_all("posts_per_page", Some("camelCase")), "postsPerPage");
        assert_eq!(apply_rename_all("url", Some("camelCase")), "url");
        assert_eq!(apply_rename_all("path_prefix", None), "path_prefix");
    }

    #[test]
    fn section_inference() {
        assert_eq!(infer_section("AuthorConfig"), "author");
        assert_eq!(infer_section("MenuItemConfig"), "menu_item");
    }

    #[test]
    fn vec_element_type() {
        let ty: Type = syn::parse_quote!(Vec<MenuItem>);
        let inner = vec_element(&ty).map(type_to_string);
        assert_eq!(inner.as_deref(), Some("MenuItem"));

        let ty: Type = syn::parse_quote!(String);
        assert!(vec_element(&ty).is_none());
    }

    #[test]
    fn default_quoting() {
        assert_eq!(format_default_for_type("/", "String"), "\"/\"");
        assert_eq!(format_default_for_type("4", "i64"), "4");
        assert_eq!(format_default_for_type("false", "bool"), "false");
    }
}
