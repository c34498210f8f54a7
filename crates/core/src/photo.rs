//! Photo metadata validation.
//!
//! The repository stores only metadata about an uploaded file (path, size,
//! mime type); writing the bytes somewhere is the caller's concern and the
//! content is never inspected here.

/// Maximum length of any photo text field (filename, path, mime type).
pub const MAX_PHOTO_FIELD_LENGTH: usize = 500;

/// Validate a required photo text field (filename, original_name,
/// mime_type, file_path).
pub fn validate_photo_field(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    if value.len() > MAX_PHOTO_FIELD_LENGTH {
        return Err(format!(
            "{field} exceeds maximum length of {MAX_PHOTO_FIELD_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the reported file size in bytes.
pub fn validate_file_size(size: i64) -> Result<(), String> {
    if size <= 0 {
        return Err("file_size must be positive".to_string());
    }
    Ok(())
}
