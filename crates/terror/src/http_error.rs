use http::StatusCode;

use crate::Terror;

/// Trait for errors that a transport layer can turn into HTTP responses
///
/// Keeps error values decoupled from any particular server framework: the
/// server reads these three values and builds its own response.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `not_found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl HttpError for Terror {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    fn error_type(&self) -> &str {
        self.kind().as_str()
    }

    fn client_message(&self) -> String {
        self.message().to_owned()
    }
}
