//! Tether Definition Library
//!
//! This crate holds everything a tether API descriptor and its generated
//! clients share at runtime: the node and capability contracts, the typed
//! response protocol, and the transport primitives that generated forwarding
//! code calls into.
//!
//! ## Core Types
//!
//! ### Descriptors
//!
//! - [`Resource`] - An addressable route node (implemented by `#[resource]`)
//! - [`Capability`] - A verb declared on a node (implemented by `#[capability]`)
//! - [`Get`] / [`Post`] - The two capability contracts, resolved by position
//! - [`Verb`] - The closed set of supported HTTP verbs
//!
//! ### Response Protocol
//!
//! - [`ApiResponse`] - `Ok`, `RequestErr` or `Err` for every call
//! - [`OtherErr`] - Outcomes outside the API's own error vocabulary
//!
//! ### Transport
//!
//! - [`Transport`] - The wire-level collaborator (see [`HttpTransport`])
//! - [`get`] / [`post`] - Generic primitives invoked by generated code
//! - [`server::dispatch`] - Maps a server-side [`ApiResponse`] onto a reply
//!
//! ## Examples
//!
//! ```
//! use tether_define::prelude::*;
//!
//! #[resource("/orders")]
//! #[derive(Debug, Clone)]
//! pub struct Orders;
//!
//! #[resource("{id}")]
//! #[derive(Debug, Clone)]
//! pub struct OrderById {
//!     #[parent]
//!     pub parent: Orders,
//!     pub id: u64,
//! }
//!
//! #[capability]
//! pub struct FetchOrder;
//! impl Get<OrderById, String, ()> for FetchOrder {}
//!
//! let node = OrderById { parent: Orders, id: 7 };
//! assert_eq!(node.path()?, "/orders/7");
//! assert_eq!(OrderById::template(), "/orders/{id}");
//! # Ok::<(), tether_define::ConstructionError>(())
//! ```

extern crate self as tether_define;

pub mod contract;
pub mod error;
pub mod http;
pub mod prelude;
pub mod resource;
pub mod response;
pub mod server;
pub mod transport;

pub use contract::{Capability, Get, Post, Verb};
pub use error::{ConstructionError, DispatchError, OtherErr, ResponseError, TransportConfigError};
pub use http::{HttpTransport, HttpTransportBuilder};
pub use resource::{Resource, RouteParams};
pub use response::ApiResponse;
pub use server::{Reply, dispatch};
pub use transport::{
    REQUEST_ERROR_STATUS, Request, StatusClass, Transport, TransportOutcome, get, interpret, post,
};

pub use tether_macros::{capability, resource};
