//! Identifier conventions for generated code.
//!
//! Nodes become `snake_case` modules and capabilities become `snake_case`
//! functions. Names that collide with Rust keywords are emitted as raw
//! identifiers (`r#type`); the few keywords that cannot be raw get a
//! trailing underscore.
//!
//! Some valid item names have no usable snake-case form (`__`, `_1`). The
//! tree compiler checks [`is_valid_output_name`] before anything is emitted.

use proc_macro2::{Ident, Span};

/// Keywords reserved by some edition that `syn` still parses as plain
/// identifiers. Generated code must compile on every edition.
const EDITION_KEYWORDS: &[&str] = &["async", "await", "dyn", "try", "gen"];

/// Converts a CamelCase item name to snake_case.
///
/// ## Examples
///
/// ```
/// use tether_gen::naming::snake_case;
///
/// assert_eq!(snake_case("OrderById"), "order_by_id");
/// assert_eq!(snake_case("HTTPStatus"), "http_status");
/// assert_eq!(snake_case("ListV2Items"), "list_v2_items");
/// assert_eq!(snake_case("already_snake"), "already_snake");
/// ```
pub fn snake_case(name: &str) -> String {
    split_camel_case(name.trim_start_matches("r#"))
        .iter()
        .map(|word| word.trim_matches('_').to_lowercase())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Whether `name` (already snake-cased) can become a module or function.
///
/// ```
/// use tether_gen::naming::is_valid_output_name;
///
/// assert!(is_valid_output_name("list_orders"));
/// assert!(is_valid_output_name("gen"));
/// assert!(!is_valid_output_name(""));
/// assert!(!is_valid_output_name("1"));
/// ```
pub fn is_valid_output_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric()) && name != "_"
        }
        _ => false,
    }
}

/// Builds an identifier for `name`, escaping keywords.
///
/// `name` must pass [`is_valid_output_name`].
pub fn ident(name: &str) -> Ident {
    match name {
        "self" | "super" | "crate" | "Self" => Ident::new(&format!("{name}_"), Span::call_site()),
        _ if EDITION_KEYWORDS.contains(&name) => Ident::new_raw(name, Span::call_site()),
        _ if syn::parse_str::<Ident>(name).is_ok() => Ident::new(name, Span::call_site()),
        _ => Ident::new_raw(name, Span::call_site()),
    }
}

/// Builds one segment of an item path. Unlike [`ident`], path keywords
/// (`crate`, `self`, `super`) are kept as written.
pub fn path_segment(name: &str) -> Ident {
    match name {
        "self" | "super" | "crate" | "Self" => Ident::new(name, Span::call_site()),
        _ => ident(name),
    }
}

/// Splits a CamelCase string into individual words.
///
/// - "OrderById" -> ["Order", "By", "Id"]
/// - "HTTPClient" -> ["HTTP", "Client"]
/// - "ListV2Items" -> ["List", "V2", "Items"]
/// - "orders" -> ["orders"]
fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for i in 1..chars.len() {
        let (idx, current) = chars[i];
        let prev = chars[i - 1].1;

        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (i + 1 < chars.len() && chars[i + 1].1.is_lowercase() && prev.is_uppercase()));

        if is_new_word {
            if idx > word_start {
                words.push(&s[word_start..idx]);
            }
            word_start = idx;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_camel_case_multi_word() {
        assert_eq!(split_camel_case("OrderById"), vec!["Order", "By", "Id"]);
        assert_eq!(split_camel_case("PlaceOrder"), vec!["Place", "Order"]);
    }

    #[test]
    fn split_camel_case_acronyms() {
        assert_eq!(split_camel_case("HTTPClient"), vec!["HTTP", "Client"]);
        assert_eq!(split_camel_case("OpenAI"), vec!["Open", "AI"]);
    }

    #[test]
    fn split_camel_case_single_word() {
        assert_eq!(split_camel_case("Orders"), vec!["Orders"]);
        assert_eq!(split_camel_case("orders"), vec!["orders"]);
    }

    #[test]
    fn snake_case_collapses_existing_underscores() {
        assert_eq!(snake_case("Order_Items"), "order_items");
        assert_eq!(snake_case("r#Type"), "type");
    }

    #[test]
    fn keywords_become_raw_identifiers() {
        assert_eq!(ident("type").to_string(), "r#type");
        assert_eq!(ident("match").to_string(), "r#match");
        assert_eq!(ident("orders").to_string(), "orders");
    }

    #[test]
    fn edition_keywords_become_raw_identifiers() {
        assert_eq!(ident("gen").to_string(), "r#gen");
        assert_eq!(ident("try").to_string(), "r#try");
        assert_eq!(ident("async").to_string(), "r#async");
        assert_eq!(ident("dyn").to_string(), "r#dyn");
        assert_eq!(ident("generate").to_string(), "generate");
    }

    #[test]
    fn underscore_only_and_digit_names_have_no_output_name() {
        assert_eq!(snake_case("__"), "");
        assert_eq!(snake_case("_1"), "1");
        assert!(!is_valid_output_name(&snake_case("__")));
        assert!(!is_valid_output_name(&snake_case("_1")));
        assert!(is_valid_output_name(&snake_case("V2")));
    }

    #[test]
    fn path_keywords_get_a_suffix() {
        assert_eq!(ident("self").to_string(), "self_");
        assert_eq!(ident("super").to_string(), "super_");
    }
}
