//! Prospect field validation rules.
//!
//! Applied at the API boundary before any persistence attempt: on every
//! create, and on each supplied field of a partial update. The rules are
//! identical in both paths.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a name field (first_name / last_name).
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Basic `local@domain.tld` shape: no whitespace or extra `@`, and the
/// domain must contain at least one dot.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email regex must compile")
});

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a required name field (first or last name).
pub fn validate_person_name(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    if value.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an email address against the basic `local@domain.tld` pattern.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        ));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(format!("'{email}' is not a valid email address"));
    }
    Ok(())
}

/// Validate an estimated deal value. Zero and negative values are invalid.
pub fn validate_estimated_value(value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err("estimated_value must be a finite number".to_string());
    }
    if value <= 0.0 {
        return Err("estimated_value must be positive".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
