//! HTTP messages
use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use crate::{
    error::{MessageError, ValidationError, ValidationErrorKind},
    header::HeaderSet,
    request::Request,
    response::Response,
};

/// Protocol name in the prologue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub const ALL: [Self; 2] = [Self::Http, Self::Https];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Https => "HTTPS",
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::UnsupportedScheme, s))
    }
}

impl TryFrom<&str> for Scheme {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Protocol version in the prologue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemeVersion {
    V1_0,
    V1_1,
    V2_0,
}

impl SchemeVersion {
    pub const ALL: [Self; 3] = [Self::V1_0, Self::V1_1, Self::V2_0];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1_0 => "1.0",
            Self::V1_1 => "1.1",
            Self::V2_0 => "2.0",
        }
    }
}

impl Display for SchemeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::UnsupportedSchemeVersion, s))
    }
}

impl TryFrom<&str> for SchemeVersion {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The part shared by requests and responses: everything except the
/// prologue's variant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageParts {
    scheme: Scheme,
    scheme_version: SchemeVersion,
    headers: HeaderSet,
    body: String,
}

impl MessageParts {
    /// Validate and build the shared parts of a message.
    ///
    /// Scheme and version accept either the typed values or their textual
    /// forms. Header pairs are added in the order given and construction
    /// fails on the first duplicate.
    pub fn new<S, V, I, N, HV, B>(
        scheme: S,
        scheme_version: V,
        header_pairs: I,
        body: B,
    ) -> Result<Self, MessageError>
    where
        S: TryInto<Scheme>,
        MessageError: From<S::Error>,
        V: TryInto<SchemeVersion>,
        MessageError: From<V::Error>,
        I: IntoIterator<Item = (N, HV)>,
        N: Into<String>,
        HV: Into<String>,
        B: Into<String>,
    {
        let scheme: Scheme = scheme.try_into()?;
        let scheme_version: SchemeVersion = scheme_version.try_into()?;
        let headers = HeaderSet::try_from_pairs(header_pairs)?;

        Ok(Self::with_headers(scheme, scheme_version, headers, body))
    }

    /// Build from values that are valid by construction.
    pub fn with_headers<B: Into<String>>(
        scheme: Scheme,
        scheme_version: SchemeVersion,
        headers: HeaderSet,
        body: B,
    ) -> Self {
        Self {
            scheme,
            scheme_version,
            headers,
            body: body.into(),
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn scheme_version(&self) -> SchemeVersion {
        self.scheme_version
    }

    /// Returns the value of a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get_value(name)
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Returns the headers keyed by lower-cased name.
    pub fn header_mapping(&self) -> BTreeMap<String, String> {
        self.headers.to_mapping()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Write the wire text that follows the given prologue.
    pub(crate) fn write_text<W: std::fmt::Write>(
        &self,
        prologue: &str,
        buf: &mut W,
    ) -> std::fmt::Result {
        buf.write_str(prologue)?;
        buf.write_str("\n")?;

        for header in &self.headers {
            writeln!(buf, "{}", header)?;
        }

        buf.write_str("\n")?;
        buf.write_str(&self.body)?;

        Ok(())
    }
}

/// Which of the two message variants a text holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Request,
    Response,
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request => f.write_str("request"),
            Self::Response => f.write_str("response"),
        }
    }
}

/// Either a request or a response.
///
/// The textual representation (`Display`) is the wire text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Request(Request),
    Response(Response),
}

impl Message {
    /// Parse a message, telling requests and responses apart by their first
    /// line.
    pub fn parse(text: &str) -> Result<Self, MessageError> {
        crate::parse::parse(text, crate::parse::detect_kind(text))
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Request(..) => MessageKind::Request,
            Self::Response(..) => MessageKind::Response,
        }
    }

    pub fn parts(&self) -> &MessageParts {
        match self {
            Self::Request(request) => request.parts(),
            Self::Response(response) => response.parts(),
        }
    }

    /// The first line of the wire text.
    pub fn prologue(&self) -> String {
        match self {
            Self::Request(request) => request.prologue(),
            Self::Response(response) => response.prologue(),
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.parts().scheme()
    }

    pub fn scheme_version(&self) -> SchemeVersion {
        self.parts().scheme_version()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts().header(name)
    }

    pub fn headers(&self) -> &HeaderSet {
        self.parts().headers()
    }

    pub fn body(&self) -> &str {
        self.parts().body()
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Write the wire text as bytes.
    pub fn serialize<W: std::io::Write>(&self, mut buf: W) -> std::io::Result<()> {
        buf.write_all(self.to_text().as_bytes())
    }

    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(..))
    }

    pub fn as_request(&self) -> Option<&Request> {
        if let Self::Request(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_request(self) -> Result<Request, Self> {
        if let Self::Request(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response(..))
    }

    pub fn as_response(&self) -> Option<&Response> {
        if let Self::Response(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_response(self) -> Result<Response, Self> {
        if let Self::Response(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(request) => Display::fmt(request, f),
            Self::Response(response) => Display::fmt(response, f),
        }
    }
}

impl From<Request> for Message {
    fn from(value: Request) -> Self {
        Self::Request(value)
    }
}

impl From<Response> for Message {
    fn from(value: Response) -> Self {
        Self::Response(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DuplicateHeaderError;

    use super::*;

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("HTTP".parse::<Scheme>().unwrap(), Scheme::Http);
        assert_eq!("HTTPS".parse::<Scheme>().unwrap(), Scheme::Https);

        let error = "FTP".parse::<Scheme>().unwrap_err();
        assert_eq!(error.kind(), ValidationErrorKind::UnsupportedScheme);

        assert!("http".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_scheme_version_from_str() {
        assert_eq!("1.0".parse::<SchemeVersion>().unwrap(), SchemeVersion::V1_0);
        assert_eq!("2.0".parse::<SchemeVersion>().unwrap(), SchemeVersion::V2_0);

        let error = "1.5".parse::<SchemeVersion>().unwrap_err();
        assert_eq!(error.kind(), ValidationErrorKind::UnsupportedSchemeVersion);
        assert_eq!(error.value(), "1.5");
    }

    #[test]
    fn test_parts_new() {
        let parts = MessageParts::new(
            Scheme::Https,
            "2.0",
            [("Host", "example.com"), ("Accept", "*/*")],
            "hello",
        )
        .unwrap();

        assert_eq!(parts.scheme(), Scheme::Https);
        assert_eq!(parts.scheme_version(), SchemeVersion::V2_0);
        assert_eq!(parts.header("host"), Some("example.com"));
        assert_eq!(parts.header("Missing"), None);
        assert_eq!(parts.headers().len(), 2);
        assert_eq!(parts.body(), "hello");
        assert_eq!(
            parts.header_mapping().get("accept").map(String::as_str),
            Some("*/*")
        );
    }

    #[test]
    fn test_parts_new_rejects() {
        let error = MessageParts::new("FTP", "1.1", [("Host", "a")], "").unwrap_err();
        assert_eq!(
            error.as_validation().map(|e| e.kind()),
            Some(ValidationErrorKind::UnsupportedScheme)
        );

        let error = MessageParts::new("HTTP", "1.5", [("Host", "a")], "").unwrap_err();
        assert_eq!(
            error.as_validation().map(|e| e.kind()),
            Some(ValidationErrorKind::UnsupportedSchemeVersion)
        );

        let error = MessageParts::new(
            "HTTP",
            "1.1",
            [("Content-Type", "a"), ("content-type", "a")],
            "",
        )
        .unwrap_err();
        assert_eq!(
            error.try_into_duplicate_header().unwrap(),
            DuplicateHeaderError::new("content-type")
        );
    }

    #[test]
    fn test_write_text() {
        let parts = MessageParts::new("HTTP", "1.0", [("A-b", "c")], "").unwrap();
        let mut text = String::new();
        parts.write_text("PROLOGUE", &mut text).unwrap();
        assert_eq!(text, "PROLOGUE\nA-b: c\n\n");

        let parts = MessageParts::new("HTTP", "1.0", Vec::<(&str, &str)>::new(), "body").unwrap();
        let mut text = String::new();
        parts.write_text("PROLOGUE", &mut text).unwrap();
        assert_eq!(text, "PROLOGUE\n\nbody");
    }
}
