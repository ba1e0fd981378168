//! Error types for the runtime protocol.
//!
//! - [`OtherErr`] - client-observed outcomes outside an API's error vocabulary
//! - [`ResponseError`] - raised by [`ApiResponse::result`](crate::ApiResponse::result)
//! - [`ConstructionError`] - building a node from route parameters failed
//! - [`DispatchError`] - encoding a server reply failed
//! - [`TransportConfigError`] - an [`HttpTransport`](crate::HttpTransport) could not be built

use std::fmt::Debug;

use thiserror::Error;

/// An outcome outside the API's own error vocabulary.
///
/// Only ever observed on the client side; server logic never constructs it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtherErr {
    /// No response was obtained (connection failure, timeout, cancellation).
    #[error("network error: no response was received")]
    NetworkError,

    /// The server answered with a status outside the API's convention.
    #[error("unexpected HTTP status {status}: {message}")]
    HttpError {
        /// Status code as received.
        status: u16,
        /// Response body, lossily decoded as text.
        message: String,
    },

    /// Serialization or platform-transport failure not classified above.
    #[error("transport error: {0}")]
    TransportError(String),
}

/// The error raised by [`ApiResponse::result`](crate::ApiResponse::result).
///
/// Both variants render their payload so the message alone is enough to see
/// what went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResponseError<E: Debug> {
    /// The remote side rejected the request with a structured error.
    #[error("request rejected by the server: {0:?}")]
    Request(E),

    /// The call failed outside the API's error vocabulary.
    #[error("request failed: {0}")]
    Other(OtherErr),
}

/// A node could not be built from route parameters, or rendered back to a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A required field had no value in the route or query parameters.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field's value could not be parsed into the field's type.
    #[error("invalid value '{value}' for field `{field}`: {reason}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Raw value that failed to parse.
        value: String,
        /// Parser's error message.
        reason: String,
    },

    /// A path placeholder's value was empty, which no segment can address.
    #[error("path placeholder `{0}` has an empty value")]
    EmptyPathValue(&'static str),
}

/// Producing a server reply failed.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The success or request-error payload could not be encoded.
    #[error("failed to encode reply body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An [`HttpTransport`](crate::HttpTransport) could not be configured.
#[derive(Debug, Error)]
pub enum TransportConfigError {
    /// The base URL did not parse.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// URL as given.
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A default header name or value was rejected.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader {
        /// Header name as given.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_includes_status_and_body() {
        let err = OtherErr::HttpError {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected HTTP status 503: maintenance");
    }

    #[test]
    fn response_error_renders_structured_payload() {
        #[derive(Debug)]
        enum PlaceError {
            NoItems,
        }

        let err: ResponseError<PlaceError> = ResponseError::Request(PlaceError::NoItems);
        assert_eq!(err.to_string(), "request rejected by the server: NoItems");
    }

    #[test]
    fn construction_error_names_the_field() {
        let err = ConstructionError::InvalidField {
            field: "id",
            value: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("`id`"));
        assert!(err.to_string().contains("'abc'"));
    }
}
