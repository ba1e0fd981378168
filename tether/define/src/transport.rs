//! Transport primitives and client-side interpretation.
//!
//! Generated forwarding code calls [`get`] and [`post`] with the exact types
//! resolved from a capability's contract. Both build a [`Request`] from the
//! node, hand it to a [`Transport`], and turn the [`TransportOutcome`] into an
//! [`ApiResponse`] with [`interpret`].
//!
//! ## Interpretation Precedence
//!
//! 1. 2xx and the body decodes as `T` -> `Ok`
//! 2. [`REQUEST_ERROR_STATUS`] and the body decodes as `E` -> `RequestErr`
//! 3. any other status -> `Err(HttpError)`
//! 4. no response at all -> `Err(NetworkError)`
//! 5. anything else (including a body that fails to decode) -> `Err(TransportError)`

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::contract::Verb;
use crate::error::{ConstructionError, OtherErr};
use crate::resource::Resource;
use crate::response::ApiResponse;

/// The single status the API uses for structured request errors.
pub const REQUEST_ERROR_STATUS: u16 = 400;

/// A request ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub verb: Verb,
    /// Absolute path, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// JSON-encoded parameter (POST only).
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Builds a body-less request addressed at `node`.
    ///
    /// ## Errors
    ///
    /// See [`Resource::path`].
    pub fn for_node<N: Resource>(verb: Verb, node: &N) -> Result<Self, ConstructionError> {
        Ok(Self {
            verb,
            path: node.path()?,
            query: node
                .query()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            body: None,
        })
    }
}

/// How the transport's status fits the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    RequestError,
    OtherError,
    NetworkFailure,
}

/// What a [`Transport`] observed for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    /// A response arrived.
    Response { status: u16, body: Vec<u8> },
    /// No response was obtained.
    NetworkFailure(String),
    /// The transport failed for another reason (TLS, platform, body read).
    Fault(String),
}

impl TransportOutcome {
    pub fn classification(&self) -> StatusClass {
        match self {
            TransportOutcome::Response { status, .. } if (200..300).contains(status) => {
                StatusClass::Success
            }
            TransportOutcome::Response { status, .. } if *status == REQUEST_ERROR_STATUS => {
                StatusClass::RequestError
            }
            TransportOutcome::Response { .. } | TransportOutcome::Fault(_) => {
                StatusClass::OtherError
            }
            TransportOutcome::NetworkFailure(_) => StatusClass::NetworkFailure,
        }
    }

    /// Decodes the response body as JSON into `T`.
    ///
    /// ## Errors
    ///
    /// Returns a message when there is no body or it does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, String> {
        match self {
            TransportOutcome::Response { body, .. } => {
                serde_json::from_slice(body).map_err(|e| e.to_string())
            }
            TransportOutcome::NetworkFailure(msg) | TransportOutcome::Fault(msg) => {
                Err(format!("no body to decode: {msg}"))
            }
        }
    }
}

/// The wire-level collaborator.
///
/// Implementations must resolve every request to exactly one outcome; a
/// cancelled or timed-out call is a [`TransportOutcome::NetworkFailure`].
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> impl Future<Output = TransportOutcome> + Send;
}

/// Interprets a transport outcome as an [`ApiResponse`].
///
/// ## Examples
///
/// ```
/// use tether_define::{ApiResponse, OtherErr, TransportOutcome, interpret};
///
/// let outcome = TransportOutcome::Response { status: 200, body: b"[1,2]".to_vec() };
/// let response: ApiResponse<Vec<u8>, ()> = interpret(outcome);
/// assert_eq!(response, ApiResponse::Ok(vec![1, 2]));
///
/// let outcome = TransportOutcome::NetworkFailure("connection refused".into());
/// let response: ApiResponse<Vec<u8>, ()> = interpret(outcome);
/// assert_eq!(response, ApiResponse::Err(OtherErr::NetworkError));
/// ```
pub fn interpret<T, E>(outcome: TransportOutcome) -> ApiResponse<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    match outcome.classification() {
        StatusClass::Success => match outcome.decode::<T>() {
            Ok(result) => ApiResponse::Ok(result),
            Err(reason) => transport_error(format!("failed to decode success body: {reason}")),
        },
        StatusClass::RequestError => match outcome.decode::<E>() {
            Ok(err) => ApiResponse::RequestErr(err),
            Err(reason) => transport_error(format!("failed to decode request error body: {reason}")),
        },
        StatusClass::OtherError => match outcome {
            TransportOutcome::Response { status, body } => ApiResponse::Err(OtherErr::HttpError {
                status,
                message: String::from_utf8_lossy(&body).into_owned(),
            }),
            TransportOutcome::Fault(reason) | TransportOutcome::NetworkFailure(reason) => {
                transport_error(reason)
            }
        },
        StatusClass::NetworkFailure => {
            warn!(outcome = ?outcome, "no response received");
            ApiResponse::Err(OtherErr::NetworkError)
        }
    }
}

fn transport_error<T, E>(reason: String) -> ApiResponse<T, E> {
    warn!(%reason, "transport error");
    ApiResponse::Err(OtherErr::TransportError(reason))
}

/// GET primitive: `get::<Node, Result, Error>(transport, node)`.
pub async fn get<N, R, E>(transport: &impl Transport, node: N) -> ApiResponse<R, E>
where
    N: Resource,
    R: DeserializeOwned,
    E: DeserializeOwned,
{
    let request = match Request::for_node(Verb::Get, &node) {
        Ok(request) => request,
        Err(e) => return transport_error(format!("cannot address node: {e}")),
    };
    debug!(verb = %request.verb, path = %request.path, "sending capability request");
    interpret(transport.send(request).await)
}

/// POST primitive: `post::<Node, Param, Result, Error>(transport, node, param)`.
///
/// A parameter that cannot be encoded, or a node that cannot be addressed,
/// yields `Err(TransportError)` and no request is sent.
pub async fn post<N, P, R, E>(transport: &impl Transport, node: N, param: P) -> ApiResponse<R, E>
where
    N: Resource,
    P: Serialize,
    R: DeserializeOwned,
    E: DeserializeOwned,
{
    let body = match serde_json::to_vec(&param) {
        Ok(body) => body,
        Err(e) => return transport_error(format!("failed to encode parameter: {e}")),
    };

    let mut request = match Request::for_node(Verb::Post, &node) {
        Ok(request) => request,
        Err(e) => return transport_error(format!("cannot address node: {e}")),
    };
    request.body = Some(body);
    debug!(verb = %request.verb, path = %request.path, "sending capability request");
    interpret(transport.send(request).await)
}
