//! Submitted form data

use crate::error::FormError;
use anyhow::Result;
use indexmap::IndexMap;

/// Submitted values keyed by field name
///
/// Mirrors HTTP form semantics: a field may be absent, carry one value, or
/// carry several (checkbox groups).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    values: IndexMap<String, Vec<String>>,
}

impl Submission {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a field (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_value<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.push(name, value);
        self
    }

    /// Append a value to a field
    #[inline]
    pub fn push<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Parse `application/x-www-form-urlencoded` data such as `a=1&b=two+words`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A percent-encoded sequence does not decode to UTF-8
    #[inline]
    pub fn from_urlencoded(data: &str) -> Result<Self> {
        let mut submission = Self::new();
        submission.extend_urlencoded(data)?;
        Ok(submission)
    }

    /// Add the pairs of a URL-encoded string to this submission
    ///
    /// # Errors
    ///
    /// See [`Submission::from_urlencoded`].
    #[inline]
    pub fn extend_urlencoded(&mut self, data: &str) -> Result<()> {
        for pair in data.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            self.push(decode_component(name)?, decode_component(value)?);
        }
        Ok(())
    }

    /// First submitted value of a field
    #[must_use]
    #[inline]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All submitted values of a field; empty when absent
    #[must_use]
    #[inline]
    pub fn values(&self, name: &str) -> &[String] {
        self.values
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the field is missing or its first value is only whitespace
    #[must_use]
    #[inline]
    pub fn is_blank(&self, name: &str) -> bool {
        self.first(name).is_none_or(|value| value.trim().is_empty())
    }

    /// Values of a multi-valued field, skipping whitespace-only entries
    #[inline]
    pub fn filled_values(&self, name: &str) -> impl Iterator<Item = &str> {
        self.values(name)
            .iter()
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    #[must_use]
    #[inline]
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.push(name, value);
        }
        submission
    }
}

fn decode_component(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| {
            return FormError::configuration(format!("Invalid form data '{raw}': {e}")).into();
        })
}
