//! Error types for account validation and parsing.

use thiserror::Error;

/// Errors returned while constructing account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The display name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password confirmation differs from the password.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The color is not a `#RRGGBB` hex value.
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// Error returned while parsing user roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
