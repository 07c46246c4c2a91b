// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(HttpError),
    Json(String),
    /// The command line could not be understood.
    Usage(String),
}

/// Failures raised while talking to the panel backend.
///
/// Only transport-level problems end up here. A response with a non-success
/// status is still parsed and handed back to the caller.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// The base URL and path did not form a valid request URL.
    InvalidUrl(String),

    /// The request could not be sent or the connection dropped.
    Transport(String),

    /// The response body could not be read to completion.
    Body(String),
}

impl HttpError {
    /// Classifies a `reqwest` failure by the stage it happened in.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(err.to_string())
        } else {
            HttpError::Transport(err.to_string())
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::InvalidUrl(msg) => write!(f, "Invalid request URL: {}", msg),
            HttpError::Transport(msg) => write!(f, "Request failed: {}", msg),
            HttpError::Body(msg) => write!(f, "Could not read response body: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Json(e) => write!(f, "JSON Error: {}", e),
            Error::Usage(e) => write!(f, "{} (see --help)", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(HttpError::from_reqwest(&err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
