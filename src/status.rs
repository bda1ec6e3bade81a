//! Response status codes
use std::{fmt::Display, str::FromStr};

use crate::error::{ValidationError, ValidationErrorKind};

/// A three-digit status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: Self = Self(200);
    pub const BAD_REQUEST: Self = Self(400);
    pub const NOT_FOUND: Self = Self(404);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    pub fn new(code: u16) -> Result<Self, ValidationError> {
        if (100..=999).contains(&code) {
            Ok(Self(code))
        } else {
            Err(ValidationError::new(
                ValidationErrorKind::InvalidStatusCode,
                code.to_string(),
            ))
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Returns the standard reason phrase, if the code is a registered one.
    pub fn canonical_reason(&self) -> Option<&'static str> {
        let value = match self.0 {
            100 => "Continue",
            101 => "Switching Protocols",
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            203 => "Non-Authoritative Information",
            204 => "No Content",
            205 => "Reset Content",
            206 => "Partial Content",
            300 => "Multiple Choices",
            301 => "Moved Permanently",
            302 => "Found",
            303 => "See Other",
            304 => "Not Modified",
            305 => "Use Proxy",
            307 => "Temporary Redirect",
            308 => "Permanent Redirect",
            400 => "Bad Request",
            401 => "Unauthorized",
            402 => "Payment Required",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            406 => "Not Acceptable",
            407 => "Proxy Authentication Required",
            408 => "Request Timeout",
            409 => "Conflict",
            410 => "Gone",
            411 => "Length Required",
            412 => "Precondition Failed",
            413 => "Payload Too Large",
            414 => "URI Too Long",
            415 => "Unsupported Media Type",
            416 => "Range Not Satisfiable",
            417 => "Expectation Failed",
            418 => "I'm a teapot",
            421 => "Misdirected Request",
            422 => "Unprocessable Entity",
            426 => "Upgrade Required",
            428 => "Precondition Required",
            429 => "Too Many Requests",
            431 => "Request Header Fields Too Large",
            451 => "Unavailable For Legal Reasons",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            505 => "HTTP Version Not Supported",
            511 => "Network Authentication Required",
            _ => return None,
        };

        Some(value)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for StatusCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(ValidationErrorKind::InvalidStatusCode, s));
        }

        s.parse::<u16>()
            .ok()
            .and_then(|code| Self::new(code).ok())
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::InvalidStatusCode, s))
    }
}

impl TryFrom<&str> for StatusCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusCode> for u16 {
    fn from(value: StatusCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_range() {
        assert_eq!(StatusCode::new(200).unwrap(), StatusCode::OK);
        assert!(StatusCode::new(100).is_ok());
        assert!(StatusCode::new(999).is_ok());

        let error = StatusCode::new(99).unwrap_err();
        assert_eq!(error.kind(), ValidationErrorKind::InvalidStatusCode);
        assert!(StatusCode::new(1000).is_err());
    }

    #[test]
    fn test_status_code_from_str() {
        assert_eq!("404".parse::<StatusCode>().unwrap(), StatusCode::NOT_FOUND);
        assert!("40".parse::<StatusCode>().is_err());
        assert!("+40".parse::<StatusCode>().is_err());

        let error = "099".parse::<StatusCode>().unwrap_err();
        assert_eq!(error.kind(), ValidationErrorKind::InvalidStatusCode);
        assert_eq!(error.value(), "099");

        assert!("abc".parse::<StatusCode>().is_err());
    }

    #[test]
    fn test_canonical_reason() {
        assert_eq!(StatusCode::OK.canonical_reason(), Some("OK"));
        assert_eq!(StatusCode::NOT_FOUND.canonical_reason(), Some("Not Found"));
        assert_eq!(StatusCode::new(299).unwrap().canonical_reason(), None);
    }

    #[test]
    fn test_classes() {
        assert!(StatusCode::BAD_REQUEST.is_client_error());
        assert!(!StatusCode::BAD_REQUEST.is_server_error());
        assert!(StatusCode::INTERNAL_SERVER_ERROR.is_server_error());
        assert_eq!(StatusCode::OK.to_string(), "200");
    }
}
