//! Input validation shared by the API handlers.

use crate::error::CoreError;

/// Maximum length for entity names (projects, characters, objects, scenes).
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for a username.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate an entity name: must be non-blank and within the length limit.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{entity} name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional name from an update DTO. `None` means "unchanged".
pub fn validate_optional_name(entity: &str, name: Option<&str>) -> Result<(), CoreError> {
    match name {
        Some(name) => validate_name(entity, name),
        None => Ok(()),
    }
}

/// Shot numbers are 1-based.
pub fn validate_shot_number(number: i32) -> Result<(), CoreError> {
    if number < 1 {
        return Err(CoreError::Validation(format!(
            "Shot number must be at least 1 (got {number})"
        )));
    }
    Ok(())
}

/// Usernames: 3 to 50 characters of ASCII letters, digits, `_`, `-`, or `.`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.len();
    if !(3..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between 3 and {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, '_', '-', and '.'".to_string(),
        ));
    }
    Ok(())
}

/// Minimal structural email check: one `@` with text on both sides and a dot
/// in the domain.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}
