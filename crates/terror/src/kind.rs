use std::fmt;

use http::StatusCode;

/// Classification of a [`Terror`](crate::Terror)
///
/// Each kind parallels exactly one HTTP status. The name favors what the
/// condition means to a handler over the historical status phrase, so `401`
/// is `Unauthenticated` and `403` is `Forbidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed request (400). See RFC 7231 §6.5.1
    BadRequest,
    /// Properly formed request lacking required authentication (401)
    ///
    /// HTTP calls this "Unauthorized"; use [`ErrorKind::Forbidden`] when the
    /// caller is known but not allowed. See RFC 7235 §3.1
    Unauthenticated,
    /// Authenticated request that is nonetheless not authorized (403).
    /// See RFC 7231 §6.5.3
    Forbidden,
    /// Request for something which is not there (404). See RFC 7231 §6.5.4
    NotFound,
    /// Method understood but not supported by the target resource (405)
    ///
    /// Not for methods that are possible but disallowed under current
    /// circumstances. See RFC 7231 §6.5.5
    MethodNotAllowed,
    /// Well-formed request with semantically invalid content (422).
    /// See RFC 4918 §11.2
    UnprocessableEntity,
    /// Unexpected server side fault (500). See RFC 7231 §6.6.1
    ServerError,
}

impl ErrorKind {
    /// Every kind, in ascending code order
    pub const ALL: [Self; 7] = [
        Self::BadRequest,
        Self::Unauthenticated,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::UnprocessableEntity,
        Self::ServerError,
    ];

    /// Numeric HTTP status for this kind
    pub const fn code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthenticated => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::UnprocessableEntity => 422,
            Self::ServerError => 500,
        }
    }

    /// HTTP status for this kind
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable name (e.g. `not_found`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::ServerError => "server_error",
        }
    }

    /// Look up the kind for a numeric status
    ///
    /// Returns `None` for statuses outside the classification table.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
