//! Attribute parsing for `#[env("...")]` annotations.
//!
//! The annotation is a single comma-separated directive string. A backslash
//! escapes the next character, so `default=` and `note=` values may contain
//! commas.

use syn::{Field, LitStr};

/// Parsed `#[env("...")]` directives from a struct field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldAttrs {
    /// Custom environment variable name. When set it becomes the sole key,
    /// bypassing derivation entirely.
    pub custom_name: Option<String>,

    /// A missing value leaves the field untouched instead of failing.
    pub optional: bool,

    /// Exclude this field from the walk entirely.
    pub skip: bool,

    /// Descend into this field's type, which must itself derive `EnvFields`.
    pub nested: bool,

    /// Fallback value when no environment key is set.
    pub default_value: Option<String>,

    /// Free-text note surfaced by the documentation tables.
    pub note: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[env("...")]` attributes from a struct field.
    ///
    /// Repeated attributes merge, later ones winning. Fields without an
    /// `env` attribute get the default (required, derived-name) behavior.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            let tag: LitStr = attr.parse_args()?;
            attrs.merge(&tag.value());
        }

        Ok(attrs)
    }

    fn merge(&mut self, tag: &str) {
        for token in split_directives(tag) {
            if token == "-" {
                self.skip = true;
            } else if token == "optional" {
                self.optional = true;
            } else if token == "nested" {
                self.nested = true;
            } else if let Some(value) = token.strip_prefix("default=") {
                self.default_value = Some(value.to_string());
            } else if let Some(value) = token.strip_prefix("note=") {
                self.note = Some(value.to_string());
            } else if !token.is_empty() {
                self.custom_name = Some(token);
            }
        }
    }
}

/// Splits the directive string on unescaped commas; a backslash escapes the
/// character after it.
fn split_directives(tag: &str) -> Vec<String> {
    let mut tokens = vec![String::new()];
    let mut escape = false;

    for c in tag.chars() {
        if !escape {
            match c {
                '\\' => {
                    escape = true;
                    continue;
                }
                ',' => {
                    tokens.push(String::new());
                    continue;
                }
                _ => {}
            }
        }
        escape = false;
        tokens.last_mut().expect("tokens starts non-empty").push(c);
    }

    tokens
}

/// Converts a snake_case field identifier to the PascalCase structural name
/// used for key derivation (`remote_host` becomes `RemoteHost`).
pub fn pascal_case(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut out = String::with_capacity(ident.len());
    let mut upper_next = true;

    for c in ident.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}
