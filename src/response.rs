//! Response messages
use std::{collections::BTreeMap, fmt::Display};

use crate::{
    error::{MessageError, ValidationError, ValidationErrorKind},
    header::HeaderSet,
    message::{MessageParts, Scheme, SchemeVersion},
    status::StatusCode,
};

/// A response: status code, reason phrase and the shared message parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status_code: StatusCode,
    reason_phrase: String,
    parts: MessageParts,
}

impl Response {
    /// Validate and build a response with a caller-supplied reason phrase.
    pub fn new<C, R, S, V, I, N, HV, B>(
        status_code: C,
        reason_phrase: R,
        scheme: S,
        scheme_version: V,
        header_pairs: I,
        body: B,
    ) -> Result<Self, MessageError>
    where
        C: TryInto<StatusCode>,
        MessageError: From<C::Error>,
        R: Into<String>,
        S: TryInto<Scheme>,
        MessageError: From<S::Error>,
        V: TryInto<SchemeVersion>,
        MessageError: From<V::Error>,
        I: IntoIterator<Item = (N, HV)>,
        N: Into<String>,
        HV: Into<String>,
        B: Into<String>,
    {
        let status_code: StatusCode = status_code.try_into()?;
        let parts = MessageParts::new(scheme, scheme_version, header_pairs, body)?;

        Self::from_parts(status_code, reason_phrase, parts)
    }

    /// Validate and build a response whose reason phrase comes from
    /// [`StatusCode::canonical_reason()`].
    ///
    /// Unregistered codes get an empty reason phrase.
    pub fn with_standard_reason<C, S, V, I, N, HV, B>(
        status_code: C,
        scheme: S,
        scheme_version: V,
        header_pairs: I,
        body: B,
    ) -> Result<Self, MessageError>
    where
        C: TryInto<StatusCode>,
        MessageError: From<C::Error>,
        S: TryInto<Scheme>,
        MessageError: From<S::Error>,
        V: TryInto<SchemeVersion>,
        MessageError: From<V::Error>,
        I: IntoIterator<Item = (N, HV)>,
        N: Into<String>,
        HV: Into<String>,
        B: Into<String>,
    {
        let status_code: StatusCode = status_code.try_into()?;
        let parts = MessageParts::new(scheme, scheme_version, header_pairs, body)?;

        Ok(Self::standard(status_code, parts))
    }

    /// Build a response around already validated parts.
    ///
    /// The reason phrase must not contain line breaks.
    pub fn from_parts<C, R>(
        status_code: C,
        reason_phrase: R,
        parts: MessageParts,
    ) -> Result<Self, MessageError>
    where
        C: TryInto<StatusCode>,
        MessageError: From<C::Error>,
        R: Into<String>,
    {
        let status_code: StatusCode = status_code.try_into()?;
        let reason_phrase = reason_phrase.into();

        if !crate::parse::is_single_line(&reason_phrase) {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidReasonPhrase,
                reason_phrase,
            )
            .into());
        }

        Ok(Self {
            status_code,
            reason_phrase,
            parts,
        })
    }

    /// Build a response with the standard reason phrase.
    pub fn standard(status_code: StatusCode, parts: MessageParts) -> Self {
        Self {
            status_code,
            reason_phrase: status_code
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            parts,
        }
    }

    /// Parse response text.
    pub fn parse(text: &str) -> Result<Self, MessageError> {
        crate::parse::parse_response(text)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    pub fn parts(&self) -> &MessageParts {
        &self.parts
    }

    pub fn into_parts(self) -> (StatusCode, String, MessageParts) {
        (self.status_code, self.reason_phrase, self.parts)
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

    /// Returns the status line, `SCHEME/VERSION CODE REASON`.
    pub fn prologue(&self) -> String {
        format!(
            "{}/{} {} {}",
            self.parts.scheme(),
            self.parts.scheme_version(),
            self.status_code,
            self.reason_phrase
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

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.parts.write_text(&self.prologue(), f)
    }
}
