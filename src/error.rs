//! Error representations
use std::{backtrace::Backtrace, convert::Infallible, fmt::Display};

/// Error returned by every message construction and parsing function.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    DuplicateHeader(#[from] DuplicateHeaderError),

    #[error(transparent)]
    Malformed(#[from] MalformedMessageError),
}

impl MessageError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(..))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        if let Self::Validation(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_validation(self) -> Result<ValidationError, Self> {
        if let Self::Validation(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_duplicate_header(&self) -> bool {
        matches!(self, Self::DuplicateHeader(..))
    }

    pub fn as_duplicate_header(&self) -> Option<&DuplicateHeaderError> {
        if let Self::DuplicateHeader(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_duplicate_header(self) -> Result<DuplicateHeaderError, Self> {
        if let Self::DuplicateHeader(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(..))
    }

    pub fn as_malformed(&self) -> Option<&MalformedMessageError> {
        if let Self::Malformed(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_malformed(self) -> Result<MalformedMessageError, Self> {
        if let Self::Malformed(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }
}

// Lets typed values pass through the same `TryInto` bounds as strings.
impl From<Infallible> for MessageError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// A field holds a value outside of its permitted set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    value: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(kind: ValidationErrorKind, value: S) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// The rejected value, as given by the caller.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error: {} '{}'", self.kind, self.value.escape_debug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    UnsupportedScheme,
    UnsupportedSchemeVersion,
    UnsupportedMethod,
    InvalidStatusCode,
    InvalidReasonPhrase,
    InvalidPath,
    InvalidHeaderName,
    InvalidHeaderValue,
}

impl Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::UnsupportedScheme => "unsupported scheme",
            Self::UnsupportedSchemeVersion => "unsupported scheme version",
            Self::UnsupportedMethod => "unsupported method",
            Self::InvalidStatusCode => "invalid status code",
            Self::InvalidReasonPhrase => "invalid reason phrase",
            Self::InvalidPath => "invalid path",
            Self::InvalidHeaderName => "invalid header name",
            Self::InvalidHeaderValue => "invalid header value",
        };

        f.write_str(value)
    }
}

/// A header name was declared twice in the same message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("header {name} is already defined and cannot be set twice")]
pub struct DuplicateHeaderError {
    name: String,
}

impl DuplicateHeaderError {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// The name of the rejected declaration, with its original casing.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Raw text does not follow the wire grammar.
#[derive(Debug, thiserror::Error)]
pub struct MalformedMessageError {
    kind: MalformedKind,
    context: Box<MalformedContext>,
    backtrace: Option<Box<Backtrace>>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MalformedMessageError {
    pub fn new(kind: MalformedKind) -> Self {
        Self {
            kind,
            context: Default::default(),
            backtrace: Some(Box::new(Backtrace::capture())),
            source: None,
        }
    }

    /// Sets the 1-based line number of the offending line.
    pub fn with_position(mut self, value: u64) -> Self {
        self.context.position = Some(value);
        self
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.context.snippet = Some(value.into());
        self
    }

    pub fn with_source<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        mut self,
        source: T,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> MalformedKind {
        self.kind
    }

    pub fn position(&self) -> Option<u64> {
        self.context.position
    }

    pub fn snippet(&self) -> Option<&str> {
        self.context.snippet.as_deref()
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }
}

impl Display for MalformedMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed message: {}{}", self.kind, self.context)
    }
}

impl From<MalformedKind> for MalformedMessageError {
    fn from(value: MalformedKind) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MalformedKind {
    EmptyInput,
    MalformedPrologue,
    MissingHeaderSeparator,
    InvalidHeaderLine,
}

impl Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::EmptyInput => "empty input",
            Self::MalformedPrologue => "malformed prologue",
            Self::MissingHeaderSeparator => "missing header separator",
            Self::InvalidHeaderLine => "invalid header line",
        };

        f.write_str(value)
    }
}

#[derive(Debug, Default)]
struct MalformedContext {
    position: Option<u64>,
    snippet: Option<String>,
}

impl Display for MalformedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(position) = self.position {
            write!(f, " at position {}", position)?;
        }

        if let Some(snippet) = &self.snippet {
            write!(f, " near '{}'", snippet)?;
        }

        Ok(())
    }
}
