//! Error types
//!
//! Every failure is resolved at the request boundary: each variant maps to
//! one HTTP status code and a plain-text body.

use hyper::StatusCode;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Message returned whenever the specification document is unavailable
pub const SPEC_NOT_FOUND_MESSAGE: &str = "could not find path to swagger file";

/// Errors produced by the locator, the converter and configuration loading
#[derive(Debug)]
pub enum Error {
    /// No specification file configured or found
    NotFound,
    /// Reading the specification file failed
    Io { path: PathBuf, source: io::Error },
    /// The YAML document could not be converted to JSON
    Conversion(String),
    /// Invalid settings
    Config(String),
}

impl Error {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::Io { .. } => StatusCode::NOT_FOUND,
            Self::Conversion(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client
    ///
    /// Read failures are reported as not-found without leaking the local path.
    pub fn response_message(&self) -> String {
        match self {
            Self::NotFound | Self::Io { .. } => SPEC_NOT_FOUND_MESSAGE.to_string(),
            Self::Conversion(message) | Self::Config(message) => message.clone(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no swagger file found"),
            Self::Io { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::Conversion(message) => write!(f, "{message}"),
            Self::Config(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Conversion(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::NotFound.status_code(), StatusCode::NOT_FOUND);
        let io_err = Error::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io_err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::Conversion("bad".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_io_error_hides_path_from_client() {
        let err = Error::Io {
            path: PathBuf::from("/secret/dir/swagger.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.response_message(), SPEC_NOT_FOUND_MESSAGE);
        assert!(err.to_string().contains("/secret/dir/swagger.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_conversion_message_is_verbatim() {
        let err = Error::Conversion("mapping values are not allowed".into());
        assert_eq!(err.response_message(), "mapping values are not allowed");
        assert_eq!(err.to_string(), "mapping values are not allowed");
    }
}
