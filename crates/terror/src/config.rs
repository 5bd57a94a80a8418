//! Process-wide echo toggle
//!
//! When echo is on, every annotated error is also emitted as a `tracing`
//! event. The toggle is seeded from [`DEBUG_ENV`] the first time it is read
//! and is meant to be set once during start-up (or test setup). Flipping it
//! while other threads are constructing errors is not supported: it will not
//! corrupt anything, but which of those errors get echoed is unspecified.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

/// Environment variable that enables echo when set to a non-empty value
pub const DEBUG_ENV: &str = "DEBUG_TERROR";

/// Annotation echo configuration
///
/// Deserializable so host applications can embed it in their own config
/// files, e.g. under a `[terror]` table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebugConfig {
    /// Emit each annotated cause to the log sink
    #[serde(default)]
    pub echo: bool,
}

impl DebugConfig {
    /// Read the configuration from [`DEBUG_ENV`]
    pub fn from_env() -> Self {
        let echo = std::env::var_os(DEBUG_ENV).is_some_and(|value| !value.is_empty());
        Self { echo }
    }
}

fn echo_flag() -> &'static AtomicBool {
    static ECHO: OnceLock<AtomicBool> = OnceLock::new();
    ECHO.get_or_init(|| AtomicBool::new(DebugConfig::from_env().echo))
}

/// Apply a configuration, overriding whatever the environment said
pub fn init(config: DebugConfig) {
    echo_flag().store(config.echo, Ordering::Relaxed);
}

/// Turn echo on for the rest of the process
pub fn echo_error_log() {
    echo_flag().store(true, Ordering::Relaxed);
}

/// Whether annotations are currently echoed
pub fn is_echo_enabled() -> bool {
    echo_flag().load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_defaults_off() {
        assert_eq!(DebugConfig::default(), DebugConfig { echo: false });
    }

    #[test]
    fn deserializes_from_toml() {
        let config: DebugConfig = toml::from_str("echo = true").unwrap();
        assert!(config.echo);

        let config: DebugConfig = toml::from_str("").unwrap();
        assert!(!config.echo);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = toml::from_str::<DebugConfig>("echo = true\nverbose = true").unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn env_enables_echo() {
        temp_env::with_var(DEBUG_ENV, Some("true"), || {
            assert!(DebugConfig::from_env().echo);
        });
    }

    #[test]
    fn any_non_empty_env_value_enables_echo() {
        temp_env::with_var(DEBUG_ENV, Some("0"), || {
            assert!(DebugConfig::from_env().echo);
        });
    }

    #[test]
    fn empty_env_leaves_echo_off() {
        temp_env::with_var(DEBUG_ENV, Some(""), || {
            assert!(!DebugConfig::from_env().echo);
        });
    }

    #[test]
    fn unset_env_leaves_echo_off() {
        temp_env::with_var_unset(DEBUG_ENV, || {
            assert!(!DebugConfig::from_env().echo);
        });
    }
}
