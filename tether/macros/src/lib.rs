//! Attribute macros for tether API descriptors.
//!
//! - [`resource`] - marks a struct as a route node and implements `Resource`
//! - [`capability`] - marks a struct as a capability and implements `Capability`
//!
//! The macros only implement traits and validate what the compiler cannot;
//! discovering the tree and resolving contracts is the generator's job.
//!
//! ## Examples
//!
//! ```ignore
//! use tether_define::prelude::*;
//!
//! #[resource("/orders")]
//! pub struct Orders;
//!
//! #[resource("{id}")]
//! pub struct OrderById {
//!     #[parent]
//!     pub parent: Orders,
//!     pub id: u64,
//!     pub expand: Option<bool>,
//! }
//!
//! #[capability]
//! pub struct FetchOrder;
//! impl Get<OrderById, Order, FetchError> for FetchOrder {}
//! ```

use proc_macro::TokenStream;

mod capability;
mod parse;
mod resource;

/// Marks a struct as a route node.
///
/// ## Arguments
///
/// The single argument is the node's path segment. It may contain `{field}`
/// placeholders, each naming one of the struct's fields.
///
/// ## Field Attributes
///
/// - `#[parent]` - the field holding the constructed parent node (at most one)
/// - `#[param(default)]` - use `Default::default()` when the value is absent
///
/// Fields not named by a placeholder become query parameters. `Option<T>`
/// fields are optional.
#[proc_macro_attribute]
pub fn resource(attr: TokenStream, item: TokenStream) -> TokenStream {
    resource::resource_impl(attr.into(), item.into()).into()
}

/// Marks a struct as a capability.
///
/// The struct must then implement exactly one of `Get<..>` or `Post<..>`.
#[proc_macro_attribute]
pub fn capability(attr: TokenStream, item: TokenStream) -> TokenStream {
    capability::capability_impl(attr.into(), item.into()).into()
}
