//! Shared validation helpers for inbound HTTP adapters.
//!
//! Lengths are counted in Unicode scalar values, so `"Café"` is four
//! characters long.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    TooShort,
    TooLong,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Inclusive character-count bounds for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LengthBounds {
    field: FieldName,
    min: usize,
    max: usize,
}

pub(crate) const TITLE: LengthBounds = LengthBounds {
    field: FieldName::new("title"),
    min: 1,
    max: 100,
};

pub(crate) const TEXT: LengthBounds = LengthBounds {
    field: FieldName::new("text"),
    min: 1,
    max: 500,
};

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_bounds(self, code: ErrorCode, bounds: LengthBounds, length: usize) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
            "min": bounds.min,
            "max": bounds.max,
            "length": length,
        }))
    }
}

impl LengthBounds {
    pub(crate) fn check(self, value: &str) -> Result<(), Error> {
        let length = value.chars().count();
        let code = if length < self.min {
            ErrorCode::TooShort
        } else if length > self.max {
            ErrorCode::TooLong
        } else {
            return Ok(());
        };

        let field = self.field.as_str();
        Err(ValidationError::new(
            field,
            format!(
                "{field} must be between {} and {} characters",
                self.min, self.max
            ),
        )
        .with_bounds(code, self, length))
    }
}

/// Check an ad's title and text against their length bounds.
pub(crate) fn validate_ad_content(title: &str, text: &str) -> Result<(), Error> {
    TITLE.check(title)?;
    TEXT.check(text)
}
