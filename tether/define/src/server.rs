//! Server-side dispatch.
//!
//! Server logic answers a capability with an [`ApiResponse`]; [`dispatch`]
//! turns it into a [`Reply`] for whatever HTTP engine hosts the routes. The
//! rule is fixed and independent of the verb:
//!
//! - `Ok(result)` -> 200 with the JSON-encoded result
//! - `RequestErr(err)` -> [`REQUEST_ERROR_STATUS`] with the JSON-encoded error
//! - `Err(_)` -> contract violation; dispatch panics and no reply is produced
//!
//! [`serve_get`] and [`serve_post`] additionally construct the node (and, for
//! POST, decode the parameter) so a routing table only has to supply the
//! extracted [`RouteParams`] and the raw body.

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::DispatchError;
use crate::resource::{Resource, RouteParams};
use crate::response::ApiResponse;
use crate::transport::REQUEST_ERROR_STATUS;

/// Status for a successful capability.
pub const SUCCESS_STATUS: u16 = 200;

/// Status when the route parameters do not construct the node.
pub const UNROUTABLE_STATUS: u16 = 404;

/// Status when a POST body does not decode as the capability's parameter.
pub const UNDECODABLE_PARAM_STATUS: u16 = 422;

/// An HTTP reply produced by dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl Reply {
    fn json(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body,
            content_type: "application/json",
        }
    }

    fn text(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: message.into().into_bytes(),
            content_type: "text/plain; charset=utf-8",
        }
    }
}

/// Maps a server-produced [`ApiResponse`] onto a [`Reply`].
///
/// ## Errors
///
/// [`DispatchError::Encode`] when the payload cannot be serialized.
///
/// ## Panics
///
/// Panics when given `ApiResponse::Err`. That variant describes outcomes only
/// a client can observe; constructing it in server logic is a programming
/// error, and no reply is emitted for it.
pub fn dispatch<T, E>(response: ApiResponse<T, E>) -> Result<Reply, DispatchError>
where
    T: Serialize,
    E: Serialize,
{
    match response {
        ApiResponse::Ok(result) => Ok(Reply::json(SUCCESS_STATUS, serde_json::to_vec(&result)?)),
        ApiResponse::RequestErr(err) => Ok(Reply::json(
            REQUEST_ERROR_STATUS,
            serde_json::to_vec(&err)?,
        )),
        ApiResponse::Err(other) => panic!(
            "server contract violation: ApiResponse::Err({other}) must never be constructed by server logic"
        ),
    }
}

/// Serves a GET capability: construct the node, run `handler`, dispatch.
///
/// A node that cannot be constructed yields a 404 text reply.
///
/// ## Errors
///
/// See [`dispatch`].
pub async fn serve_get<N, R, E, F, Fut>(
    params: &RouteParams,
    handler: F,
) -> Result<Reply, DispatchError>
where
    N: Resource,
    R: Serialize,
    E: Serialize,
    F: FnOnce(N) -> Fut,
    Fut: Future<Output = ApiResponse<R, E>>,
{
    let node = match N::from_params(params) {
        Ok(node) => node,
        Err(e) => {
            debug!(template = %N::template(), error = %e, "route parameters did not construct node");
            return Ok(Reply::text(UNROUTABLE_STATUS, e.to_string()));
        }
    };
    dispatch(handler(node).await)
}

/// Serves a POST capability: construct the node, decode the parameter, run
/// `handler`, dispatch.
///
/// A node that cannot be constructed yields a 404 text reply; a body that
/// does not decode as `P` yields a 422 text reply.
///
/// ## Errors
///
/// See [`dispatch`].
pub async fn serve_post<N, P, R, E, F, Fut>(
    params: &RouteParams,
    body: &[u8],
    handler: F,
) -> Result<Reply, DispatchError>
where
    N: Resource,
    P: DeserializeOwned,
    R: Serialize,
    E: Serialize,
    F: FnOnce(N, P) -> Fut,
    Fut: Future<Output = ApiResponse<R, E>>,
{
    let node = match N::from_params(params) {
        Ok(node) => node,
        Err(e) => {
            debug!(template = %N::template(), error = %e, "route parameters did not construct node");
            return Ok(Reply::text(UNROUTABLE_STATUS, e.to_string()));
        }
    };
    let param = match serde_json::from_slice::<P>(body) {
        Ok(param) => param,
        Err(e) => {
            debug!(template = %N::template(), error = %e, "POST body did not decode");
            return Ok(Reply::text(
                UNDECODABLE_PARAM_STATUS,
                format!("invalid parameter: {e}"),
            ));
        }
    };
    dispatch(handler(node, param).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OtherErr;

    #[derive(Debug, Serialize)]
    enum PlaceError {
        OrderWithIdAlreadyExists { id: u64 },
    }

    #[test]
    fn ok_becomes_success_reply() {
        let reply = dispatch::<_, PlaceError>(ApiResponse::Ok(vec![1u64, 2])).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, b"[1,2]");
        assert_eq!(reply.content_type, "application/json");
    }

    #[test]
    fn request_err_becomes_designated_status() {
        let reply = dispatch::<u64, _>(ApiResponse::RequestErr(
            PlaceError::OrderWithIdAlreadyExists { id: 4 },
        ))
        .unwrap();
        assert_eq!(reply.status, REQUEST_ERROR_STATUS);
        assert_eq!(reply.body, br#"{"OrderWithIdAlreadyExists":{"id":4}}"#);
    }

    #[test]
    #[should_panic(expected = "server contract violation")]
    fn err_aborts_dispatch() {
        let _ = dispatch::<u64, PlaceError>(ApiResponse::Err(OtherErr::NetworkError));
    }

    mod property_tests {
        use super::*;
        use crate::transport::{TransportOutcome, interpret};
        use proptest::prelude::*;
        use serde::Deserialize;

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        struct Order {
            id: u64,
            note: String,
            items: Vec<(String, u32)>,
        }

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        enum RejectError {
            Duplicate { id: u64 },
            TooLarge(u32),
            Closed,
        }

        fn order() -> impl Strategy<Value = Order> {
            (
                any::<u64>(),
                "\\PC*",
                prop::collection::vec(("[a-z]{1,8}", any::<u32>()), 0..6),
            )
                .prop_map(|(id, note, items)| Order { id, note, items })
        }

        fn reject_error() -> impl Strategy<Value = RejectError> {
            prop_oneof![
                any::<u64>().prop_map(|id| RejectError::Duplicate { id }),
                any::<u32>().prop_map(RejectError::TooLarge),
                Just(RejectError::Closed),
            ]
        }

        /// What a client sees when the reply crosses the wire untouched.
        fn deliver(reply: Reply) -> TransportOutcome {
            TransportOutcome::Response {
                status: reply.status,
                body: reply.body,
            }
        }

        proptest! {
            #[test]
            fn prop_ok_survives_dispatch_then_interpret(order in order()) {
                let reply = dispatch::<_, RejectError>(ApiResponse::Ok(order.clone())).unwrap();
                prop_assert_eq!(reply.status, SUCCESS_STATUS);
                prop_assert_eq!(
                    interpret::<Order, RejectError>(deliver(reply)),
                    ApiResponse::Ok(order)
                );
            }

            #[test]
            fn prop_request_err_survives_dispatch_then_interpret(err in reject_error()) {
                let reply = dispatch::<Order, _>(ApiResponse::RequestErr(err.clone())).unwrap();
                prop_assert_eq!(reply.status, REQUEST_ERROR_STATUS);
                prop_assert_eq!(
                    interpret::<Order, RejectError>(deliver(reply)),
                    ApiResponse::RequestErr(err)
                );
            }

            #[test]
            fn prop_scalar_results_survive(value in any::<i64>(), text in "\\PC*") {
                let reply = dispatch::<_, ()>(ApiResponse::Ok((value, text.clone()))).unwrap();
                prop_assert_eq!(
                    interpret::<(i64, String), ()>(deliver(reply)),
                    ApiResponse::Ok((value, text))
                );
            }
        }
    }
}
