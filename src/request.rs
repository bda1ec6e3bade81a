//! Request messages
use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use crate::{
    error::{MessageError, ValidationError, ValidationErrorKind},
    header::HeaderSet,
    message::{MessageParts, Scheme, SchemeVersion},
};

/// Request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Options,
    Connect,
    Trace,
    Head,
    Delete,
}

impl Method {
    pub const ALL: [Self; 9] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Options,
        Self::Connect,
        Self::Trace,
        Self::Head,
        Self::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Connect => "CONNECT",
            Self::Trace => "TRACE",
            Self::Head => "HEAD",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::UnsupportedMethod, s))
    }
}

impl TryFrom<&str> for Method {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A request: method, target path and the shared message parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    parts: MessageParts,
}

impl Request {
    /// Validate and build a request.
    ///
    /// ```
    /// use httptext::request::Request;
    ///
    /// let request = Request::new("GET", "/users", "HTTP", "1.1", [("Host", "example.com")], "")?;
    /// assert_eq!(request.to_text(), "GET /users HTTP/1.1\nHost: example.com\n\n");
    /// # Ok::<(), httptext::error::MessageError>(())
    /// ```
    pub fn new<M, P, S, V, I, N, HV, B>(
        method: M,
        path: P,
        scheme: S,
        scheme_version: V,
        header_pairs: I,
        body: B,
    ) -> Result<Self, MessageError>
    where
        M: TryInto<Method>,
        MessageError: From<M::Error>,
        P: Into<String>,
        S: TryInto<Scheme>,
        MessageError: From<S::Error>,
        V: TryInto<SchemeVersion>,
        MessageError: From<V::Error>,
        I: IntoIterator<Item = (N, HV)>,
        N: Into<String>,
        HV: Into<String>,
        B: Into<String>,
    {
        let method: Method = method.try_into()?;
        let parts = MessageParts::new(scheme, scheme_version, header_pairs, body)?;

        Self::from_parts(method, path, parts)
    }

    /// Build a request around already validated parts.
    ///
    /// The path is kept as is, but it must be non-empty and free of line
    /// breaks to fit on the prologue line.
    pub fn from_parts<M, P>(method: M, path: P, parts: MessageParts) -> Result<Self, MessageError>
    where
        M: TryInto<Method>,
        MessageError: From<M::Error>,
        P: Into<String>,
    {
        let method: Method = method.try_into()?;
        let path = path.into();

        if path.is_empty() || !crate::parse::is_single_line(&path) {
            return Err(ValidationError::new(ValidationErrorKind::InvalidPath, path).into());
        }

        Ok(Self {
            method,
            path,
            parts,
        })
    }

    /// Parse request text.
    pub fn parse(text: &str) -> Result<Self, MessageError> {
        crate::parse::parse_request(text)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parts(&self) -> &MessageParts {
        &self.parts
    }

    pub fn into_parts(self) -> (Method, String, MessageParts) {
        (self.method, self.path, self.parts)
    }

    pub fn scheme(&self) -> Scheme {
        self.parts.scheme()
    }

    pub fn scheme_version(&self) -> SchemeVersion {
        self.parts.scheme_version()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.header(name)
    }

    pub fn headers(&self) -> &HeaderSet {
        self.parts.headers()
    }

    pub fn header_mapping(&self) -> BTreeMap<String, String> {
        self.parts.header_mapping()
    }

    pub fn body(&self) -> &str {
        self.parts.body()
    }

    /// Returns the request line, `METHOD PATH SCHEME/VERSION`.
    pub fn prologue(&self) -> String {
        format!(
            "{} {} {}/{}",
            self.method,
            self.path,
            self.parts.scheme(),
            self.parts.scheme_version()
        )
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Write the wire text as bytes.
    pub fn serialize<W: std::io::Write>(&self, mut buf: W) -> std::io::Result<()> {
        buf.write_all(self.to_text().as_bytes())
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.parts.write_text(&self.prologue(), f)
    }
}
