//! Parsing for `#[resource]` arguments and field attributes.

use syn::{
    parse::{Parse, ParseStream},
    Attribute, Error, GenericArgument, LitStr, PathArguments, Result, Type,
};

/// Arguments of `#[resource("segment")]`.
#[derive(Debug)]
pub struct ResourceArgs {
    pub segment: LitStr,
}

impl Parse for ResourceArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Err(input.error("missing path segment: #[resource(\"/segment\")]"));
        }
        let segment: LitStr = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("expected a single path segment literal"));
        }
        if segment.value().is_empty() {
            return Err(Error::new(
                segment.span(),
                "path segment must not be empty (use \"/\" for the root)",
            ));
        }
        Ok(Self { segment })
    }
}

/// Tether-specific attributes found on one field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldAttrs {
    /// `#[parent]`
    pub parent: bool,
    /// `#[param(default)]`
    pub default: bool,
}

impl FieldAttrs {
    /// Reads and strips `#[parent]` / `#[param(..)]` from a field's attributes.
    ///
    /// The attributes are removed because nothing else registers them.
    pub fn take(attrs: &mut Vec<Attribute>) -> Result<Self> {
        let mut found = FieldAttrs::default();
        let mut kept = Vec::with_capacity(attrs.len());

        for attr in attrs.drain(..) {
            if attr.path().is_ident("parent") {
                attr.meta.require_path_only()?;
                found.parent = true;
            } else if attr.path().is_ident("param") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("default") {
                        found.default = true;
                        Ok(())
                    } else {
                        Err(meta.error("unknown param attribute, expected `default`"))
                    }
                })?;
            } else {
                kept.push(attr);
            }
        }

        *attrs = kept;
        Ok(found)
    }
}

/// Extracts `{placeholder}` names from a segment, in order.
pub fn placeholders(segment: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut start = None;

    for (idx, c) in segment.char_indices() {
        if c == '{' {
            start = Some(idx + 1);
        } else if c == '}' {
            if let Some(begin) = start.take() {
                let name = &segment[begin..idx];
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
    }

    names
}

/// Returns `T` for a field typed `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let last = type_path.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
