//! Error types shared by weft crates

use miette::Diagnostic;

/// Main error type for weft operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum WeftError {
    /// Request could not be sent or its body not read
    #[error("request to {url} failed: {message}")]
    #[diagnostic(code(weft::http))]
    Http { url: String, message: String },

    /// Server answered with a non-success status
    #[error("request to {url} returned status {status}")]
    #[diagnostic(code(weft::http::status))]
    Status { url: String, status: u16 },

    /// Serialization/deserialization error
    #[error(transparent)]
    #[diagnostic_source]
    Serde(#[from] SerDeError),

    /// Invalid or unsupported configuration
    #[error("invalid configuration: {0}")]
    #[diagnostic(code(weft::config))]
    Config(String),

    /// IO error
    #[error(transparent)]
    #[diagnostic(code(weft::io))]
    Io(#[from] std::io::Error),

    /// URL parsing/joining error
    #[error(transparent)]
    #[diagnostic(code(weft::url))]
    Url(#[from] url::ParseError),
}

/// Serialization/deserialization errors
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum SerDeError {
    #[error(transparent)]
    #[diagnostic(code(weft::serde::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(weft::serde::toml))]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    #[diagnostic(code(weft::serde::toml))]
    TomlSer(#[from] toml::ser::Error),
}

impl From<serde_json::Error> for WeftError {
    fn from(err: serde_json::Error) -> Self {
        WeftError::Serde(err.into())
    }
}

impl From<toml::de::Error> for WeftError {
    fn from(err: toml::de::Error) -> Self {
        WeftError::Serde(err.into())
    }
}

impl From<toml::ser::Error> for WeftError {
    fn from(err: toml::ser::Error) -> Self {
        WeftError::Serde(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err: WeftError = serde_json::from_str::<bool>("nope").unwrap_err().into();
        assert!(matches!(err, WeftError::Serde(SerDeError::Json(_))));
    }

    #[test]
    fn test_status_message() {
        let err = WeftError::Status {
            url: "https://example.com/paypal/disconnect".into(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "request to https://example.com/paypal/disconnect returned status 500"
        );
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("weft::http::status"));
    }
}
