use std::fmt;

/// Result type for plenilunio-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// Transport-level HTTP failure (connect, TLS, body read)
    Http(reqwest::Error),

    /// Server answered with a non-success status
    Status(u16),

    /// Base URL that cannot carry a request path
    InvalidUrl(String),

    /// Remote lookups are switched off
    Disabled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Http(err) => write!(f, "HTTP request failed: {}", err),
            Error::Status(status) => write!(f, "HTTP error! status: {}", status),
            Error::InvalidUrl(url) => write!(f, "Invalid base URL: {}", url),
            Error::Disabled => write!(f, "remote lookups are disabled"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Status(_) | Error::InvalidUrl(_) | Error::Disabled => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<plenilunio_types::Error> for Error {
    fn from(err: plenilunio_types::Error) -> Self {
        match err {
            plenilunio_types::Error::Json(err) => Error::Json(err),
        }
    }
}
