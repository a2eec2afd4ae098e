use reqwest::{Method, StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("Request rejected by interceptor: {0}")]
    Rejected(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// The backend answers 404 both for unknown ids and for searches or
    /// filters that matched nothing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Raw response body of a non-2xx answer.
    pub fn body(&self) -> Option<&str> {
        match self {
            ClientError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_accessors() {
        let err = ClientError::Status {
            method: Method::GET,
            url: "http://localhost:5000/api/productos/7".to_string(),
            status: StatusCode::NOT_FOUND,
            body: r#"{"mensaje":"Producto no encontrado"}"#.to_string(),
        };

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.body(), Some(r#"{"mensaje":"Producto no encontrado"}"#));
        assert_eq!(
            err.to_string(),
            "GET http://localhost:5000/api/productos/7 failed with status 404 Not Found"
        );
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let err = ClientError::rejected("missing token");
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Request rejected by interceptor: missing token");
    }
}
