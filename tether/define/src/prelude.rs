//! Convenient re-exports for writing descriptors and calling generated code.
//!
//! ```
//! use tether_define::prelude::*;
//!
//! #[resource("/health")]
//! pub struct Health;
//!
//! #[capability]
//! pub struct Ping;
//! impl Get<Health, String, ()> for Ping {}
//! ```

pub use crate::contract::{Capability, Get, Post, Verb};
pub use crate::error::{OtherErr, ResponseError};
pub use crate::resource::{Resource, RouteParams};
pub use crate::response::ApiResponse;
pub use crate::transport::{Transport, TransportOutcome};
pub use tether_macros::{capability, resource};
