//! Reading field annotations off `#[schema]`, `#[serde]` and `///` attributes.

use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Ident, Lit, LitBool, LitStr, Meta, Token, Visibility};

/// Explicit `#[schema(...)]` annotations on one field. Values are kept raw; the
/// runtime does all interpretation.
#[derive(Debug, Default, PartialEq)]
pub struct SchemaAttrs {
    pub json: Option<String>,
    pub description: Option<String>,
    pub enum_values: Option<String>,
    pub required: Option<String>,
}

impl SchemaAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = SchemaAttrs::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("schema")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("json") {
                    out.json = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("description") {
                    out.description = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("enum") {
                    out.enum_values = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("required") {
                    let value = meta.value()?;
                    out.required = Some(if value.peek(LitBool) {
                        value.parse::<LitBool>()?.value.to_string()
                    } else {
                        value.parse::<LitStr>()?.value()
                    });
                } else {
                    return Err(meta.error(
                        "unknown schema attribute; expected `json`, `description`, `enum` or `required`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(out)
    }
}

/// The subset of serde field attributes that shape the serialized name.
#[derive(Debug, Default, PartialEq)]
pub struct SerdeAttrs {
    pub rename: Option<String>,
    pub skip: bool,
    pub omitempty: bool,
}

impl SerdeAttrs {
    /// Malformed serde attributes are left for serde's own derive to report.
    pub fn parse(attrs: &[Attribute]) -> Self {
        let mut out = SerdeAttrs::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                    out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                    return Ok(());
                }
                if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                    out.skip = true;
                } else if meta.path.is_ident("default")
                    || meta.path.is_ident("skip_serializing_if")
                {
                    out.omitempty = true;
                }
                skip_value(&meta)
            });
        }

        out
    }

    /// Serialization tag in `name,omitempty` form, or `None` when the field would
    /// serialize under its own identifier anyway.
    pub fn json_tag(&self, ident: &str, rule: Option<RenameRule>) -> Option<String> {
        if self.skip {
            return Some("-".to_owned());
        }

        let name = self
            .rename
            .clone()
            .or_else(|| rule.map(|rule| rule.apply_to_field(ident)));

        match (name, self.omitempty) {
            (None, false) => None,
            (Some(name), false) => Some(name),
            (name, true) => Some(format!("{},omitempty", name.unwrap_or_default())),
        }
    }
}

/// Consume whatever follows a nested meta path we don't care about.
fn skip_value(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_value(&inner))?;
    }
    Ok(())
}

/// serde's `rename_all` conventions, applied to snake_case field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    pub fn from_name(rule: &str) -> Option<Self> {
        Some(match rule {
            "lowercase" => RenameRule::Lower,
            "UPPERCASE" => RenameRule::Upper,
            "PascalCase" => RenameRule::Pascal,
            "camelCase" => RenameRule::Camel,
            "snake_case" => RenameRule::Snake,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnake,
            "kebab-case" => RenameRule::Kebab,
            "SCREAMING-KEBAB-CASE" => RenameRule::ScreamingKebab,
            _ => return None,
        })
    }

    /// Container-level `#[serde(rename_all = "...")]`, if any.
    pub fn from_container(attrs: &[Attribute]) -> Option<Self> {
        let mut rule = None;
        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") && meta.input.peek(Token![=]) {
                    let lit = meta.value()?.parse::<LitStr>()?;
                    rule = RenameRule::from_name(&lit.value());
                    return Ok(());
                }
                skip_value(&meta)
            });
        }
        rule
    }

    pub fn apply_to_field(self, field: &str) -> String {
        match self {
            RenameRule::Lower | RenameRule::Snake => field.to_owned(),
            RenameRule::Upper | RenameRule::ScreamingSnake => field.to_ascii_uppercase(),
            RenameRule::Pascal => {
                let mut pascal = String::new();
                let mut capitalize = true;
                for ch in field.chars() {
                    if ch == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(ch.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(ch);
                    }
                }
                pascal
            }
            RenameRule::Camel => {
                let pascal = RenameRule::Pascal.apply_to_field(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => pascal,
                }
            }
            RenameRule::Kebab => field.replace('_', "-"),
            RenameRule::ScreamingKebab => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

/// Gather `///` doc-comments into a single string, trimming the leading space after `///`.
pub fn docs(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|a| match &a.meta {
            Meta::NameValue(nv) if a.path().is_ident("doc") => {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) = &nv.value
                {
                    Some(s.value().trim_start().to_owned())
                } else {
                    None
                }
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only plain `pub` fields are visible to callers outside the crate.
pub fn is_exported(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

/// Field identifier as serde sees it, without any `r#` prefix.
pub fn unraw(ident: &Ident) -> String {
    ident.unraw().to_string()
}
