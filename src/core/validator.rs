// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Form field validation
//!
//! Pure functions: no state, no side effects, same answer for the same
//! input. Each returns `Ok(())` or a [`ValidationError`] whose `Display`
//! text is the message shown next to the offending field.
//!
//! Lengths are counted in characters, not bytes.

use thiserror::Error;

/// Shortest accepted email address
pub const MIN_EMAIL_LEN: usize = 5;

/// Shortest accepted password
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field-level validation failures
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// Field was empty (or whitespace-only for required fields)
    #[error("{0} is required")]
    Required(String),

    /// Email lacks an `@` or a `.`
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// Email is shorter than [`MIN_EMAIL_LEN`]
    #[error("Email is too short")]
    EmailTooShort,

    /// Password is shorter than [`MIN_PASSWORD_LEN`]
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

/// Validates an email address
///
/// Checks run in order and the first failure wins:
/// 1. empty
/// 2. missing `@` or `.`
/// 3. fewer than [`MIN_EMAIL_LEN`] characters
///
/// # Example
///
/// ```
/// use flowstate::core::validator::{validate_email, ValidationError};
///
/// assert!(validate_email("demo@example.com").is_ok());
/// assert_eq!(validate_email("ab"), Err(ValidationError::InvalidEmailFormat));
/// ```
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Required("Email".to_string()));
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidEmailFormat);
    }

    if email.chars().count() < MIN_EMAIL_LEN {
        return Err(ValidationError::EmailTooShort);
    }

    Ok(())
}

/// Validates a password: non-empty and at least [`MIN_PASSWORD_LEN`] characters
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required("Password".to_string()));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates that `value` has at least one non-whitespace character
///
/// `field_name` is used verbatim in the error message, e.g.
/// `"Display Name"` → "Display Name is required".
pub fn validate_required(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field_name.to_string()));
    }

    Ok(())
}

/// Converts a validation result into the text shown under a field
///
/// Empty string when valid.
pub fn field_error(result: &Result<(), ValidationError>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}
