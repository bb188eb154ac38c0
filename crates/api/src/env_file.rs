//! Optional settings file applied to the process environment at startup.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

/// Settings file looked up in the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Loads `KEY=VALUE` lines from `path` into the process environment.
///
/// Variables already set in the environment are left untouched. Returns
/// `Ok(false)` when the file does not exist.
pub fn load(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match dotenv::from_path(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "loaded env file");
            Ok(true)
        }
        Err(dotenv::Error::Io(err)) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no env file present");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

/// Loads [`DEFAULT_ENV_FILE`] unless `IS_LOCAL` is set to a true value.
pub fn load_unless_local() -> Result<bool> {
    if is_local(std::env::var("IS_LOCAL").ok().as_deref()) {
        tracing::debug!("IS_LOCAL set, skipping env file");
        return Ok(false);
    }
    load(DEFAULT_ENV_FILE)
}

/// Interprets an `IS_LOCAL` value. Unset or unrecognised values are false.
pub fn is_local(value: Option<&str>) -> bool {
    value.and_then(parse_bool).unwrap_or(false)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
