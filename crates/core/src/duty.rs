//! Duty name rule shared by the server and the client.
//!
//! A name is valid when, after trimming surrounding whitespace, it is
//! non-empty and at most [`MAX_NAME_LENGTH`] characters long. Length is
//! counted in Unicode scalar values, never bytes. Only the trimmed form is
//! ever stored or displayed, which is why a validated name is carried around
//! as a [`DutyName`] rather than a bare `String`.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a trimmed duty name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Entity label used in not-found errors.
pub const ENTITY_DUTY: &str = "Duty";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a raw name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Absent or the empty string.
    #[error("name is empty")]
    Empty,

    /// Non-empty but nothing left after trimming.
    #[error("name is only whitespace")]
    Blank,

    /// Longer than [`MAX_NAME_LENGTH`] characters after trimming.
    #[error("name exceeds {MAX_NAME_LENGTH} characters")]
    TooLong,
}

impl NameError {
    /// Message returned in the `error` field of a 400 response.
    pub fn server_message(self) -> &'static str {
        match self {
            NameError::Empty | NameError::Blank => {
                "Name is required and must be a non-empty string"
            }
            NameError::TooLong => "Name must be 255 characters or less",
        }
    }

    /// Message shown next to the input field in the client.
    pub fn client_message(self) -> &'static str {
        match self {
            NameError::Empty => "Please enter a duty name.",
            NameError::Blank => "Duty name cannot be only spaces.",
            NameError::TooLong => "Duty name must be 255 characters or fewer.",
        }
    }
}

// ---------------------------------------------------------------------------
// Validated name
// ---------------------------------------------------------------------------

/// A trimmed, non-empty duty name of at most [`MAX_NAME_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DutyName(String);

impl DutyName {
    /// Validate a name that may be missing entirely.
    ///
    /// A missing value is reported as [`NameError::Empty`], the same as a
    /// blank one.
    pub fn parse(raw: Option<&str>) -> Result<Self, NameError> {
        validate_name(raw.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for DutyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DutyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for DutyName {
    type Error = NameError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        validate_name(raw)
    }
}

/// Apply the name rule to `raw`, returning the canonical trimmed name.
///
/// # Examples
///
/// ```
/// use duties_core::duty::{validate_name, NameError};
///
/// assert_eq!(validate_name("  Buy milk  ").unwrap().as_str(), "Buy milk");
/// assert_eq!(validate_name(""), Err(NameError::Empty));
/// assert_eq!(validate_name(" \t\n "), Err(NameError::Blank));
/// assert_eq!(validate_name(&"x".repeat(256)), Err(NameError::TooLong));
/// ```
pub fn validate_name(raw: &str) -> Result<DutyName, NameError> {
    if raw.is_empty() {
        return Err(NameError::Empty);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Blank);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    Ok(DutyName(trimmed.to_string()))
}
