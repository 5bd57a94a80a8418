//! Typed, user-friendly errors
//!
//! A [`Terror`] carries two things:
//!
//! - a message meant for the end user, classified by an [`ErrorKind`] that
//!   parallels an HTTP status;
//! - the underlying error, if any, plus a log-only annotation naming the
//!   function, file and line where the `Terror` was created.
//!
//! Handlers can answer the user with `to_string()` and `code()` while the
//! full story goes to the log via `cause()`.
//!
//! ```rust
//! use terror::HttpError;
//!
//! fn load_profile(id: &str) -> Result<String, terror::Terror> {
//!     std::fs::read_to_string(format!("/profiles/{id}"))
//!         .map_err(|e| terror::server_error!("could not load profile", e))
//! }
//!
//! if let Err(err) = load_profile("does-not-exist") {
//!     assert_eq!(err.status_code(), http::StatusCode::INTERNAL_SERVER_ERROR);
//!     assert_eq!(err.client_message(), "could not load profile");
//!     assert!(err.cause().contains("load_profile"));
//! }
//! ```
//!
//! Set `DEBUG_TERROR` to any non-empty value, or call [`echo_error_log`], to
//! also emit every annotation as a `tracing` event.

#![allow(clippy::must_use_candidate)]

mod annotate;
pub mod config;
mod error;
mod http_error;
mod kind;
mod macros;
mod site;

pub use config::{DebugConfig, echo_error_log};
pub use error::{Cause, Terror, wrap_cause};
pub use http_error::HttpError;
pub use kind::ErrorKind;
pub use site::Site;
#[doc(hidden)]
pub use site::enclosing_function;

/// Result type alias using [`Terror`]
pub type Result<T> = std::result::Result<T, Terror>;
