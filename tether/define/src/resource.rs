//! Route nodes.
//!
//! A node is a struct annotated with `#[resource("segment")]`. The macro
//! implements [`Resource`] for it, so the full route can be rebuilt from a
//! leaf by walking the owned `#[parent]` chain, and a node can be constructed
//! back from the parameters a server router extracted.
//!
//! Segment templates use `{field}` placeholders:
//!
//! ```text
//! #[resource("/orders")]  Orders                     -> /orders
//! #[resource("{id}")]     OrderById { parent, id }   -> /orders/{id}
//! #[resource("items")]    OrderItems { parent }      -> /orders/{id}/items
//! ```
//!
//! Placeholder values are percent-encoded into a single segment, so a value
//! holding `/`, `{` or `%` survives the trip through [`RouteParams::match_template`].
//! Empty values cannot be addressed and are rejected.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::error::ConstructionError;

/// Characters escaped in a placeholder value: the URL path-segment set plus
/// `/` and `%`, so the value stays one segment and decodes back unchanged.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// An addressable route node.
///
/// Implemented by the `#[resource]` attribute; hand-written impls must keep
/// `template()` and `path()` in agreement.
pub trait Resource: Sized {
    /// This node's own segment template, e.g. `"{id}"`.
    const SEGMENT: &'static str;

    /// The full route template from the root down to this node.
    fn template() -> String;

    /// The full concrete path, with every placeholder on the chain filled in.
    ///
    /// ## Errors
    ///
    /// Returns [`ConstructionError::EmptyPathValue`] when a placeholder
    /// anywhere on the chain renders to an empty string.
    fn path(&self) -> Result<String, ConstructionError>;

    /// Query parameters carried by this node (fields not used in the path).
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Builds the node (and its parents) from route and query parameters.
    ///
    /// ## Errors
    ///
    /// Returns [`ConstructionError::MissingField`] when a required field has
    /// no value and [`ConstructionError::InvalidField`] when a value does not
    /// parse.
    fn from_params(params: &RouteParams) -> Result<Self, ConstructionError>;
}

/// Route and query parameters for constructing a node server-side.
///
/// ## Examples
///
/// ```
/// use tether_define::RouteParams;
///
/// let params = RouteParams::match_template("/orders/{id}", "/orders/42").unwrap();
/// assert_eq!(params.require::<u64>("id").unwrap(), 42);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: BTreeMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Merges query pairs. Path values win over query values of the same name.
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.values.entry(name.into()).or_insert_with(|| value.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parses a required value.
    ///
    /// ## Errors
    ///
    /// [`ConstructionError::MissingField`] if absent,
    /// [`ConstructionError::InvalidField`] if it does not parse.
    pub fn require<T>(&self, name: &'static str) -> Result<T, ConstructionError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.optional(name)?
            .ok_or(ConstructionError::MissingField(name))
    }

    /// Parses an optional value; absence is `Ok(None)`.
    ///
    /// ## Errors
    ///
    /// [`ConstructionError::InvalidField`] if present but unparseable.
    pub fn optional<T>(&self, name: &'static str) -> Result<Option<T>, ConstructionError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| ConstructionError::InvalidField {
                    field: name,
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Matches a concrete path against a full route template, decoding
    /// percent-encoded placeholder values.
    ///
    /// Returns `None` when the literal segments or the segment count differ,
    /// or a value does not decode to UTF-8.
    pub fn match_template(template: &str, path: &str) -> Option<Self> {
        let expected: Vec<&str> = split_segments(template).collect();
        let actual: Vec<&str> = split_segments(path).collect();
        if expected.len() != actual.len() {
            return None;
        }

        let mut params = Self::new();
        for (pattern, value) in expected.iter().zip(&actual) {
            match placeholder_name(pattern) {
                Some(name) => {
                    let decoded = percent_decode_str(value).decode_utf8().ok()?;
                    params.insert(name, decoded);
                }
                None if pattern == value => {}
                None => return None,
            }
        }
        Some(params)
    }
}

/// Extracts placeholder names from a segment template, in order.
///
/// ## Examples
///
/// ```
/// use tether_define::resource::placeholders;
///
/// assert_eq!(placeholders("/orders"), Vec::<&str>::new());
/// assert_eq!(placeholders("{id}"), vec!["id"]);
/// assert_eq!(placeholders("/threads/{thread}/messages/{message}"), vec!["thread", "message"]);
/// ```
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut start = None;

    for (idx, c) in template.char_indices() {
        match c {
            '{' => start = Some(idx + 1),
            '}' => {
                if let Some(begin) = start.take() {
                    let name = &template[begin..idx];
                    if !name.is_empty() {
                        names.push(name);
                    }
                }
            }
            _ => {}
        }
    }

    names
}

/// Fills `{name}` placeholders with percent-encoded values in one pass.
/// Unknown placeholders are left as-is; substituted text is never rescanned.
///
/// ## Errors
///
/// [`ConstructionError::EmptyPathValue`] when a known placeholder's value is
/// empty.
///
/// ## Examples
///
/// ```
/// use tether_define::resource::render_segment;
///
/// let values = [("org", "{repo}".to_string()), ("repo", "a/b".to_string())];
/// assert_eq!(render_segment("{org}-{repo}", &values).unwrap(), "%7Brepo%7D-a%2Fb");
/// ```
pub fn render_segment(
    template: &str,
    values: &[(&'static str, String)],
) -> Result<String, ConstructionError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rendered.push('{');
            rest = after;
            break;
        };

        let name = &after[..close];
        match values.iter().find(|(field, _)| *field == name) {
            Some((field, value)) if value.is_empty() => {
                return Err(ConstructionError::EmptyPathValue(*field));
            }
            Some((_, value)) => rendered.extend(utf8_percent_encode(value, SEGMENT_ENCODE_SET)),
            None => {
                rendered.push('{');
                rendered.push_str(name);
                rendered.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

/// Appends a segment to a parent path, normalising slashes.
///
/// ## Examples
///
/// ```
/// use tether_define::resource::join_segments;
///
/// assert_eq!(join_segments("", "/orders"), "/orders");
/// assert_eq!(join_segments("/orders", "{id}"), "/orders/{id}");
/// assert_eq!(join_segments("/orders/", "/items/"), "/orders/items");
/// assert_eq!(join_segments("", "/"), "/");
/// ```
pub fn join_segments(parent: &str, segment: &str) -> String {
    let joined: Vec<&str> = split_segments(parent).chain(split_segments(segment)).collect();
    format!("/{}", joined.join("/"))
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn placeholder_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}
