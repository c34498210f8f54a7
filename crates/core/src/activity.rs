//! Activity log validation.

/// Maximum length of an activity title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of an activity description.
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Validate an activity title: required, within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title is required".to_string());
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(format!(
            "title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional activity description.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}
