//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string, vec_element};

/// Generate template code (TokenStream) for fields.
///
/// Plain keys are emitted first and nested sections last, since TOML
/// assigns every key after a table header to that table.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let plain: Vec<TokenStream> = fields
        .iter()
        .filter(|f| !f.sub)
        .map(|f| generate_field_template_code(f))
        .collect();

    let sections: Vec<TokenStream> = fields
        .iter()
        .filter(|f| f.sub)
        .map(|f| generate_sub_template_code(f))
        .collect();

    quote! {
        #(#plain)*
        #(#sections)*
    }
}

/// Doc comment lines for a field, unless they are rendered inline.
fn doc_code(info: &FieldInfo) -> TokenStream {
    match &info.doc {
        Some(doc) if !info.inline_doc => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        _ => quote! {},
    }
}

/// Trailing `  # doc` for `#[config(inline_doc)]` fields.
fn inline_suffix(info: &FieldInfo) -> String {
    match &info.doc {
        Some(doc) if info.inline_doc => {
            let first = doc.lines().next().unwrap_or_default().trim();
            format!("  # {}", first)
        }
        _ => String::new(),
    }
}

/// Nested section: delegate to the child type's own template.
fn generate_sub_template_code(info: &FieldInfo) -> TokenStream {
    let doc = doc_code(info);
    let section_ty = vec_element(&info.ty).unwrap_or(&info.ty);
    quote! {
        out.push('\n');
        #doc
        out.push_str(&<#section_ty>::template_with_header());
    }
}

/// Generate TOML template code for a single key.
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;
    let doc = doc_code(info);
    let suffix = inline_suffix(info);

    let ty_str = type_to_string(&info.ty);
    let is_optional = ty_str.starts_with("Option<");

    // Optional fields without explicit default are commented out
    if is_optional && info.default.is_none() {
        let line = format!("# {} = \"\"{}\n", toml_name, suffix);
        return quote! {
            #doc
            out.push_str(#line);
        };
    }

    // Explicit default value (compile-time known)
    if let Some(default_val) = &info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{} = {}{}\n", toml_name, formatted, suffix);
        return quote! {
            #doc
            out.push_str(#line);
        };
    }

    // Runtime value from Default::default()
    quote! {
        #doc
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#suffix);
        out.push('\n');
    }
}
