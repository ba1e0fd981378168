//! Orders API
//!
//! The descriptor lives in [`orders`]; [`client`] is generated from it at
//! build time and mirrors its node tree:
//!
//! ```text
//! client::orders::list_orders              GET  /orders
//! client::orders::place_order              POST /orders
//! client::orders::order_by_id::fetch_order GET  /orders/{id}
//! client::orders::order_by_id::order_items::list_items
//!                                          GET  /orders/{id}/items
//! ```
//!
//! ## Examples
//!
//! ```no_run
//! use tether_define::{ApiResponse, HttpTransport};
//! use tether_definitions::client;
//! use tether_definitions::orders::{OrderById, Orders};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::builder("http://localhost:8080").build()?;
//! let node = OrderById { parent: Orders, id: 7 };
//! match client::orders::order_by_id::fetch_order(&transport, node).await {
//!     ApiResponse::Ok(order) => println!("{} items", order.items.len()),
//!     ApiResponse::RequestErr(e) => eprintln!("rejected: {e:?}"),
//!     ApiResponse::Err(e) => eprintln!("failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod orders;

/// Generated forwarding client for [`orders`].
pub mod client {
    include!(concat!(env!("OUT_DIR"), "/client.rs"));
}
