//! Message headers
//!
//! A [`HeaderSet`] keeps headers in insertion order and allows each name,
//! compared without ASCII case-sensitivity, only once. Declaring a name a
//! second time is an error even when the values are identical.
use std::{collections::BTreeMap, fmt::Display};

use crate::error::{DuplicateHeaderError, MessageError, ValidationError, ValidationErrorKind};

mod de;
mod ser;

/// A single validated name-value header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    /// Create a header.
    ///
    /// The name must match `[A-Za-z][A-Za-z0-9-]+` and the value must be
    /// non-empty without line breaks. The name keeps the casing given.
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Result<Self, ValidationError> {
        let name = name.into();
        let value = value.into();

        if !crate::parse::validate_header_name(&name) {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidHeaderName,
                name,
            ));
        }

        if !crate::parse::validate_header_value(&value) {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidHeaderValue,
                value,
            ));
        }

        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the name is equal without ASCII case-sensitivity.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the `Name: value` line without a line ending.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Ordered collection of headers with unique case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    headers: Vec<Header>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    /// Build a set from pairs, stopping at the first invalid or duplicate
    /// header.
    pub fn try_from_pairs<I, N, V>(pairs: I) -> Result<Self, MessageError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::new();

        for (name, value) in pairs {
            set.add(name, value)?;
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a header.
    ///
    /// Fails with [`DuplicateHeaderError`] if the name is already present,
    /// or with a [`ValidationError`] if the header is invalid. The set is
    /// unchanged on failure.
    pub fn add<N: Into<String>, V: Into<String>>(
        &mut self,
        name: N,
        value: V,
    ) -> Result<(), MessageError> {
        let name = name.into();

        if self.contains_name(&name) {
            return Err(DuplicateHeaderError::new(name).into());
        }

        self.headers.push(Header::new(name, value)?);

        Ok(())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header.matches(name))
    }

    pub fn get(&self, name: &str) -> Option<&Header> {
        self.headers.iter().find(|header| header.matches(name))
    }

    /// Same as [`Self::get()`].
    pub fn find(&self, name: &str) -> Option<&Header> {
        self.get(name)
    }

    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(Header::value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.headers.iter()
    }

    /// Returns each header as a `Name: value` line, in insertion order.
    pub fn render_all(&self) -> Vec<String> {
        self.headers.iter().map(Header::render).collect()
    }

    /// Returns the values keyed by lower-cased name.
    ///
    /// Original casing and order are lost.
    pub fn to_mapping(&self) -> BTreeMap<String, String> {
        self.headers
            .iter()
            .map(|header| (header.name.to_ascii_lowercase(), header.value.clone()))
            .collect()
    }
}

impl IntoIterator for HeaderSet {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for HeaderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for header in &self.headers {
            writeln!(f, "{}", header)?;
        }

        Ok(())
    }
}
