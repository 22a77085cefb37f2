//! Named text-pattern extraction over raw page markup.
//!
//! Extraction is deliberately literal: each field is a pattern anchored on
//! fixed substrings of the directory's markup, not a document parser. The
//! [`FieldPattern`] trait is the only seam the assembler depends on.

use regex::Regex;

use crate::error::ScraperError;

/// Something that pulls an ordered list of values out of a text blob.
pub trait FieldPattern {
    /// Returns every non-overlapping match in order of first occurrence.
    fn captures(&self, text: &str) -> Vec<String>;
}

impl<T: FieldPattern + ?Sized> FieldPattern for Box<T> {
    fn captures(&self, text: &str) -> Vec<String> {
        (**self).captures(text)
    }
}

/// A [`FieldPattern`] backed by a regular expression with exactly one
/// capture group. The group's text becomes the field value.
#[derive(Debug, Clone)]
pub struct RegexField {
    regex: Regex,
}

impl RegexField {
    /// Compiles `pattern` for the field called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidPattern`] if the pattern does not
    /// compile or does not declare exactly one capture group.
    pub fn new(name: &str, pattern: &str) -> Result<Self, ScraperError> {
        let regex = Regex::new(pattern).map_err(|e| ScraperError::InvalidPattern {
            name: name.to_owned(),
            reason: e.to_string(),
        })?;

        // captures_len counts the implicit whole-match group 0.
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(ScraperError::InvalidPattern {
                name: name.to_owned(),
                reason: format!("expected exactly one capture group, found {groups}"),
            });
        }

        Ok(Self { regex })
    }
}

impl FieldPattern for RegexField {
    fn captures(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .map(|caps| caps.get(1).map_or_else(String::new, |m| m.as_str().to_owned()))
            .collect()
    }
}

/// Per-field match lists, in the order the patterns were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    fields: Vec<(String, Vec<String>)>,
}

impl ExtractedFields {
    /// Builds a field set directly, mainly for assembling synthetic input.
    #[must_use]
    pub fn from_fields(fields: Vec<(String, Vec<String>)>) -> Self {
        Self { fields }
    }

    /// Matches for `name`, or `None` if no pattern with that name ran.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Removes and returns the matches for `name`; empty if absent.
    pub fn take(&mut self, name: &str) -> Vec<String> {
        self.fields
            .iter_mut()
            .find(|(field, _)| field == name)
            .map(|(_, values)| std::mem::take(values))
            .unwrap_or_default()
    }

    /// `(name, match count)` for every field, in insertion order.
    #[must_use]
    pub fn lengths(&self) -> Vec<(String, usize)> {
        self.fields
            .iter()
            .map(|(name, values)| (name.clone(), values.len()))
            .collect()
    }
}

/// Applies every named pattern to `text`.
pub fn extract_fields<P: FieldPattern>(text: &str, patterns: &[(&str, P)]) -> ExtractedFields {
    let fields = patterns
        .iter()
        .map(|(name, pattern)| {
            let values = pattern.captures(text);
            tracing::debug!(field = *name, matches = values.len(), "extracted field");
            ((*name).to_owned(), values)
        })
        .collect();
    ExtractedFields { fields }
}
