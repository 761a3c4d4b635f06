//! Field validation with aggregated violation reporting.
//!
//! Handlers reject a request with a single bad-request error listing every
//! violation, so validation functions collect into a `Vec<Violation>` instead
//! of failing on the first offending field.

use std::fmt;

use serde::Serialize;

/// Maximum length for free-text name fields.
pub const MAX_NAME_LEN: usize = 255;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire-level name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the constraint that failed.
    pub message: String,
}

impl Violation {
    /// Create a new violation for `field`.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Record a violation if `value` is present but longer than [`MAX_NAME_LEN`].
pub fn check_max_len(violations: &mut Vec<Violation>, field: &'static str, value: Option<&str>) {
    if let Some(value) = value
        && value.chars().count() > MAX_NAME_LEN
    {
        violations.push(Violation::new(
            field,
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
}

/// Record a violation if `value` is present but blank (empty or whitespace).
pub fn check_non_blank_if_present(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: Option<&str>,
) {
    if let Some(value) = value
        && value.trim().is_empty()
    {
        violations.push(Violation::new(field, "must not be blank"));
    }
}

/// Record a violation if `value` is absent or blank.
pub fn check_required_non_blank(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: Option<&str>,
) {
    match value {
        Some(value) if !value.trim().is_empty() => {}
        _ => violations.push(Violation::new(field, "must not be blank")),
    }
}

/// Record a violation if `value` is present and negative.
pub fn check_non_negative(violations: &mut Vec<Violation>, field: &'static str, value: Option<i32>) {
    if let Some(value) = value
        && value < 0
    {
        violations.push(Violation::new(field, "must not be negative"));
    }
}
