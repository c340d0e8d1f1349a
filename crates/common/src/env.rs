//! Environment helpers
//!
//! Thin wrappers over `std::env` used as fallbacks when no config file is present.

use std::str::FromStr;

use tracing::warn;

/// Load `.env` from the working directory if present.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!(error = %e, "failed to load .env");
        }
    }
}

/// Read a string variable, falling back to `default` when unset or blank.
pub fn var_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Read and parse a variable; unset or unparsable values yield `None`.
pub fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(%key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}
