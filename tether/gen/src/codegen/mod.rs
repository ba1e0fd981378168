//! Code generation for tether clients.
//!
//! Every generator here returns a `proc_macro2::TokenStream`; the output
//! stage validates it with `syn` and formats it with `prettyplease`.
//!
//! ## Submodules
//!
//! - [`forwarding`] - One forwarding function per capability binding
//! - [`unit`] - One module per compiled node, nested like the node tree
//!
//! ## Generated Shape
//!
//! ```text
//! /// `Orders` at `/orders`.
//! pub mod orders {
//!     /// GET `ListOrders` on `/orders`.
//!     pub async fn list_orders(
//!         transport: &impl ::tether_define::Transport,
//!         node: crate::orders::Orders,
//!     ) -> ::tether_define::ApiResponse<Vec<crate::orders::Order>, ()> {
//!         ::tether_define::get::<crate::orders::Orders, Vec<crate::orders::Order>, ()>(transport, node).await
//!     }
//!
//!     pub mod order_by_id { .. }
//! }
//! ```

pub mod forwarding;
pub mod unit;

pub use forwarding::generate_operation;
pub use unit::generate_unit;
