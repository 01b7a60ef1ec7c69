// Validation utilities module
// Provides format checks shared by the auth and room handlers

use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Same loose shape the signup form enforces: something@something.something
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"))
}

/// Validates that an email matches the basic address pattern
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if email_pattern().is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email_format"))
    }
}

/// Validates that a password is at least MIN_PASSWORD_LEN characters
pub fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ValidationError::new("password_too_short"))
    }
}

/// Validates that a room name is non-blank
pub fn validate_room_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::new("room_name_required"))
    } else {
        Ok(())
    }
}
