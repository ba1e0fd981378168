//! The typed response protocol.
//!
//! Every capability call resolves to exactly one [`ApiResponse`] variant,
//! on both sides of the wire:
//!
//! | variant          | server side                  | client side                         |
//! |------------------|------------------------------|-------------------------------------|
//! | `Ok(result)`     | 200 + encoded result         | 2xx body decoded as `T`             |
//! | `RequestErr(e)`  | 400 + encoded error          | 400 body decoded as `E`             |
//! | `Err(other)`     | contract violation (panics)  | anything else, see [`OtherErr`]     |

use std::fmt::Debug;

use crate::error::{OtherErr, ResponseError};

/// Result of one capability call.
///
/// ## Examples
///
/// ```
/// use tether_define::{ApiResponse, OtherErr};
///
/// let ok: ApiResponse<u64, ()> = ApiResponse::Ok(7);
/// assert_eq!(ok.result().unwrap(), 7);
///
/// let failed: ApiResponse<u64, ()> = ApiResponse::Err(OtherErr::NetworkError);
/// let message = failed.result().unwrap_err().to_string();
/// assert!(message.contains("network error"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ApiResponse<T, E> {
    /// The call succeeded.
    Ok(T),
    /// The remote side rejected the request with a structured error.
    RequestErr(E),
    /// The call failed outside the API's error vocabulary.
    Err(OtherErr),
}

impl<T, E> ApiResponse<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Ok(_))
    }

    /// The success value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            ApiResponse::Ok(result) => Some(result),
            ApiResponse::RequestErr(_) | ApiResponse::Err(_) => None,
        }
    }

    /// The structured request error, if any.
    pub fn request_err(self) -> Option<E> {
        match self {
            ApiResponse::RequestErr(err) => Some(err),
            ApiResponse::Ok(_) | ApiResponse::Err(_) => None,
        }
    }

    /// The out-of-vocabulary error, if any.
    pub fn other_err(self) -> Option<OtherErr> {
        match self {
            ApiResponse::Err(other) => Some(other),
            ApiResponse::Ok(_) | ApiResponse::RequestErr(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U, E> {
        match self {
            ApiResponse::Ok(result) => ApiResponse::Ok(f(result)),
            ApiResponse::RequestErr(err) => ApiResponse::RequestErr(err),
            ApiResponse::Err(other) => ApiResponse::Err(other),
        }
    }

    pub fn map_request_err<F>(self, f: impl FnOnce(E) -> F) -> ApiResponse<T, F> {
        match self {
            ApiResponse::Ok(result) => ApiResponse::Ok(result),
            ApiResponse::RequestErr(err) => ApiResponse::RequestErr(f(err)),
            ApiResponse::Err(other) => ApiResponse::Err(other),
        }
    }
}

impl<T, E: Debug> ApiResponse<T, E> {
    /// Returns the success value, or an error describing why there is none.
    ///
    /// ## Errors
    ///
    /// [`ResponseError::Request`] for `RequestErr`, [`ResponseError::Other`]
    /// for `Err`. The error's message includes the rendered payload.
    pub fn result(self) -> Result<T, ResponseError<E>> {
        match self {
            ApiResponse::Ok(result) => Ok(result),
            ApiResponse::RequestErr(err) => Err(ResponseError::Request(err)),
            ApiResponse::Err(other) => Err(ResponseError::Other(other)),
        }
    }
}

impl<T, E> From<OtherErr> for ApiResponse<T, E> {
    fn from(other: OtherErr) -> Self {
        ApiResponse::Err(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum PlaceError {
        AlreadyExists { id: u64 },
    }

    #[test]
    fn result_surfaces_request_error_payload() {
        let response: ApiResponse<u64, PlaceError> =
            ApiResponse::RequestErr(PlaceError::AlreadyExists { id: 3 });
        let err = response.result().unwrap_err();
        assert_eq!(err, ResponseError::Request(PlaceError::AlreadyExists { id: 3 }));
        assert!(err.to_string().contains("AlreadyExists { id: 3 }"));
    }

    #[test]
    fn result_surfaces_http_error() {
        let response: ApiResponse<u64, PlaceError> = ApiResponse::Err(OtherErr::HttpError {
            status: 500,
            message: "boom".to_string(),
        });
        let message = response.result().unwrap_err().to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn accessors_select_one_variant() {
        let ok: ApiResponse<u64, PlaceError> = ApiResponse::Ok(1);
        assert!(ok.is_ok());
        assert_eq!(ok.clone().ok(), Some(1));
        assert_eq!(ok.clone().request_err(), None);
        assert_eq!(ok.other_err(), None);

        let err: ApiResponse<u64, PlaceError> = OtherErr::NetworkError.into();
        assert_eq!(err.other_err(), Some(OtherErr::NetworkError));
    }

    #[test]
    fn map_preserves_error_variants() {
        let err: ApiResponse<u64, PlaceError> = ApiResponse::Err(OtherErr::NetworkError);
        assert_eq!(err.map(|v| v + 1), ApiResponse::Err(OtherErr::NetworkError));

        let ok: ApiResponse<u64, PlaceError> = ApiResponse::Ok(1);
        assert_eq!(ok.map(|v| v + 1), ApiResponse::Ok(2));

        let rejected: ApiResponse<u64, PlaceError> =
            ApiResponse::RequestErr(PlaceError::AlreadyExists { id: 1 });
        assert_eq!(
            rejected.map_request_err(|_| "taken"),
            ApiResponse::RequestErr("taken")
        );
    }
}
