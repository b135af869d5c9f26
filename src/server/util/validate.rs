//! Field checks for request payloads.

use crate::server::error::AppError;

/// Rejects empty or whitespace-only values.
///
/// # Arguments
/// - `field` - Field name reported in the error message
/// - `value` - Submitted value
///
/// # Returns
/// - `Ok(())` - Value has visible content
/// - `Err(AppError::BadRequest)` - Value is blank
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Rejects values that are not Discord snowflake IDs (1 to 20 ASCII digits).
pub fn require_snowflake(field: &str, value: &str) -> Result<(), AppError> {
    let valid = !value.is_empty() && value.len() <= 20 && value.bytes().all(|b| b.is_ascii_digit());

    if !valid {
        return Err(AppError::BadRequest(format!(
            "{} must be a Discord ID, got {:?}",
            field, value
        )));
    }

    Ok(())
}
