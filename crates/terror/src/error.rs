use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::annotate::annotate;
use crate::{ErrorKind, Site};

/// Shared handle to an underlying error wrapped by a [`Terror`]
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// A typed, user-friendly error
///
/// A `Terror` pairs two audiences:
///
/// - the end user, who sees [`message`](Self::message) (also the `Display`
///   output) and [`code`](Self::code);
/// - the operator, who logs [`cause`](Self::cause) and
///   [`cause_error`](Self::cause_error).
///
/// Values are immutable once constructed. Build them with the per-kind
/// macros, which capture the caller's location:
///
/// ```rust
/// use std::io;
///
/// let err = terror::not_found!("no such user");
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.to_string(), "no such user");
/// assert!(!err.has_cause());
///
/// let db = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset");
/// let err = terror::server_error!("could not save record", db);
/// assert_eq!(err.code(), 500);
/// assert!(err.cause().ends_with(") connection reset"));
/// ```
#[derive(Clone)]
pub struct Terror {
    message: String,
    kind: ErrorKind,
    cause: String,
    cause_error: Option<Cause>,
}

impl Terror {
    /// Create an error of any kind
    ///
    /// The cause, if any, is annotated with `site`.
    pub fn new(kind: ErrorKind, site: Site, message: impl Into<String>, cause: Option<Cause>) -> Self {
        let annotation = annotate(site, cause.as_deref());

        Self {
            message: message.into(),
            kind,
            cause: annotation,
            cause_error: cause,
        }
    }

    /// Malformed request (400)
    pub fn bad_request(site: Site, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::new(ErrorKind::BadRequest, site, message, cause)
    }

    /// Properly formed request lacking required authentication (401)
    pub fn unauthenticated(site: Site, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::new(ErrorKind::Unauthenticated, site, message, cause)
    }

    /// Authenticated but not authorized (403)
    pub fn forbidden(site: Site, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::new(ErrorKind::Forbidden, site, message, cause)
    }

    /// Resource absent (404)
    pub fn not_found(site: Site, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::new(ErrorKind::NotFound, site, message, cause)
    }

    /// Method unsupported for the target resource (405)
    pub fn method_not_allowed(site: Site, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, site, message, cause)
    }

    /// Well-formed but semantically invalid (422)
    pub fn unprocessable_entity(site: Site, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, site, message, cause)
    }

    /// Unexpected backend fault (500)
    ///
    /// Always wraps the error that caused it.
    pub fn server_error(site: Site, message: impl Into<String>, cause: Cause) -> Self {
        Self::new(ErrorKind::ServerError, site, message, Some(cause))
    }

    /// User-facing message, safe to show to end users
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Numeric HTTP status
    pub const fn code(&self) -> u16 {
        self.kind.code()
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether this error wraps an underlying error
    pub const fn has_cause(&self) -> bool {
        self.cause_error.is_some()
    }

    /// Annotated cause: creating function, file, line and cause message
    ///
    /// For internal logging only. Never expose this to end users; it leaks
    /// source paths and internal structure. Empty when there is no cause.
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// The wrapped error, if any
    pub fn cause_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause_error.as_deref()
    }
}

/// Wrap any error as a [`Cause`]
///
/// For the constructor functions, which take `Option<Cause>`:
/// `Terror::not_found(site!(), "gone", Some(wrap_cause(err)))`.
pub fn wrap_cause<E>(error: E) -> Cause
where
    E: Error + Send + Sync + 'static,
{
    Arc::new(error)
}

impl fmt::Display for Terror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for Terror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Terror");
        d.field("kind", &self.kind);
        d.field("code", &self.code());
        d.field("message", &self.message);
        if !self.cause.is_empty() {
            d.field("cause", &self.cause);
        }
        if let Some(source) = &self.cause_error {
            d.field("cause_error", &source.to_string());
        }
        d.finish()
    }
}

impl Error for Terror {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause_error.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
