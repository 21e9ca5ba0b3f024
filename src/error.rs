// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Normalized failure of a photo listing request.
///
/// Every failure path of the fetch (non-success status, transport error,
/// body that is not a JSON array) ends up in this one shape so the gallery
/// can render it without caring where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Human-readable explanation shown in the error state.
    pub message: String,

    /// HTTP status code, when the server answered at all.
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Error for a response whose status is not in the 2xx range.
    pub fn http_status(status: u16) -> Self {
        Self {
            message: format!("HTTP error: status {}", status),
            status: Some(status),
        }
    }

    /// Returns the i18n message key used as the error title.
    pub fn i18n_key(&self) -> &'static str {
        match self.status {
            Some(status) if status >= 500 => "error-fetch-server",
            Some(_) => "error-fetch-http",
            None => "error-fetch-network",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) if !self.message.contains(&status.to_string()) => {
                write!(f, "{} (status {})", self.message, status)
            }
            _ => write!(f, "{}", self.message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid photo listing: {}", err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn http_status_carries_code_and_message() {
        let err = ApiError::http_status(500);
        assert_eq!(err.status, Some(500));
        assert_eq!(err.to_string(), "HTTP error: status 500");
    }

    #[test]
    fn display_appends_status_when_message_lacks_it() {
        let err = ApiError {
            message: "upstream unavailable".into(),
            status: Some(503),
        };
        assert_eq!(err.to_string(), "upstream unavailable (status 503)");
    }

    #[test]
    fn api_error_i18n_keys() {
        assert_eq!(ApiError::http_status(502).i18n_key(), "error-fetch-server");
        assert_eq!(ApiError::http_status(404).i18n_key(), "error-fetch-http");
        assert_eq!(ApiError::new("offline").i18n_key(), "error-fetch-network");
    }

    #[test]
    fn json_error_becomes_statusless_api_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(err.status.is_none());
        assert!(err.message.starts_with("Invalid photo listing"));
    }

    #[test]
    fn api_error_wraps_into_crate_error() {
        let err: Error = ApiError::new("offline").into();
        assert_eq!(err.to_string(), "API Error: offline");
    }
}
