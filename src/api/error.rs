use std::fmt;

/// Failure talking to the Hacker News API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never got a response (connect, timeout, DNS).
    Network(String),
    /// The API answered with a non-success status.
    HttpStatus(u16, String),
    /// The body was not the JSON we expected.
    Parse(String),
}

impl ApiError {
    /// Whether pressing retry has a reasonable chance of working.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpStatus(code, _) => *code == 429 || *code >= 500,
            Self::Parse(_) => false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(detail) => write!(f, "Hacker News is unreachable ({detail})"),
            Self::HttpStatus(404, _) => f.write_str("Hacker News has no such item"),
            Self::HttpStatus(429, _) => f.write_str("Hacker News is rate limiting requests"),
            Self::HttpStatus(code, reason) if reason.is_empty() => {
                write!(f, "Hacker News answered HTTP {code}")
            }
            Self::HttpStatus(code, reason) => write!(f, "Hacker News answered HTTP {code} {reason}"),
            Self::Parse(detail) => write!(f, "Unreadable response from Hacker News ({detail})"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let reason = status.canonical_reason().unwrap_or_default();
            return Self::HttpStatus(status.as_u16(), reason.to_string());
        }
        if err.is_decode() {
            return Self::Parse(err.to_string());
        }
        let detail = if err.is_timeout() {
            "timed out".to_string()
        } else if err.is_connect() {
            "connection refused".to_string()
        } else {
            err.without_url().to_string()
        };
        Self::Network(detail)
    }
}
