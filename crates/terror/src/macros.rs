//! Constructor macros
//!
//! Each macro captures the invoking function, file and line, then calls the
//! matching [`Terror`](crate::Terror) constructor. Two forms are accepted:
//!
//! ```rust
//! let err = terror::bad_request!("Invalid email");
//! assert!(!err.has_cause());
//!
//! let parse = "abc".parse::<u32>().unwrap_err();
//! let err = terror::bad_request!("Invalid age", parse);
//! assert!(err.has_cause());
//! ```
//!
//! The cause may be any `Error + Send + Sync + 'static` value.
//! [`server_error!`](crate::server_error) always requires one.

/// Malformed request (400)
#[macro_export]
macro_rules! bad_request {
    ($message:expr $(,)?) => {
        $crate::Terror::bad_request($crate::site!(), $message, ::core::option::Option::None)
    };
    ($message:expr, $cause:expr $(,)?) => {
        $crate::Terror::bad_request(
            $crate::site!(),
            $message,
            ::core::option::Option::Some($crate::wrap_cause($cause)),
        )
    };
}

/// Request lacking required authentication (401)
#[macro_export]
macro_rules! unauthenticated {
    ($message:expr $(,)?) => {
        $crate::Terror::unauthenticated($crate::site!(), $message, ::core::option::Option::None)
    };
    ($message:expr, $cause:expr $(,)?) => {
        $crate::Terror::unauthenticated(
            $crate::site!(),
            $message,
            ::core::option::Option::Some($crate::wrap_cause($cause)),
        )
    };
}

/// Authenticated but not authorized (403)
#[macro_export]
macro_rules! forbidden {
    ($message:expr $(,)?) => {
        $crate::Terror::forbidden($crate::site!(), $message, ::core::option::Option::None)
    };
    ($message:expr, $cause:expr $(,)?) => {
        $crate::Terror::forbidden(
            $crate::site!(),
            $message,
            ::core::option::Option::Some($crate::wrap_cause($cause)),
        )
    };
}

/// Resource absent (404)
#[macro_export]
macro_rules! not_found {
    ($message:expr $(,)?) => {
        $crate::Terror::not_found($crate::site!(), $message, ::core::option::Option::None)
    };
    ($message:expr, $cause:expr $(,)?) => {
        $crate::Terror::not_found(
            $crate::site!(),
            $message,
            ::core::option::Option::Some($crate::wrap_cause($cause)),
        )
    };
}

/// Method unsupported for the target resource (405)
#[macro_export]
macro_rules! method_not_allowed {
    ($message:expr $(,)?) => {
        $crate::Terror::method_not_allowed($crate::site!(), $message, ::core::option::Option::None)
    };
    ($message:expr, $cause:expr $(,)?) => {
        $crate::Terror::method_not_allowed(
            $crate::site!(),
            $message,
            ::core::option::Option::Some($crate::wrap_cause($cause)),
        )
    };
}

/// Well-formed but semantically invalid (422)
#[macro_export]
macro_rules! unprocessable_entity {
    ($message:expr $(,)?) => {
        $crate::Terror::unprocessable_entity($crate::site!(), $message, ::core::option::Option::None)
    };
    ($message:expr, $cause:expr $(,)?) => {
        $crate::Terror::unprocessable_entity(
            $crate::site!(),
            $message,
            ::core::option::Option::Some($crate::wrap_cause($cause)),
        )
    };
}

/// Unexpected backend fault (500), wrapping its cause
#[macro_export]
macro_rules! server_error {
    ($message:expr, $cause:expr $(,)?) => {
        $crate::Terror::server_error($crate::site!(), $message, $crate::wrap_cause($cause))
    };
}
