//! Registration input and its client-side validation.

use super::{AccountDomainError, Email, Role};
use serde::{Deserialize, Serialize};

/// Registration form input, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    confirm_password: Option<String>,
    role: Role,
}

impl RegisterRequest {
    /// Creates a request for a developer account.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: None,
            role: Role::default(),
        }
    }

    /// Sets the password confirmation to check against the password.
    #[must_use]
    pub fn with_confirmation(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = Some(confirm_password.into());
        self
    }

    /// Sets the role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Validates the form, checking the confirmation before anything else.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::PasswordMismatch`],
    /// [`AccountDomainError::EmptyName`], [`AccountDomainError::InvalidEmail`],
    /// or [`AccountDomainError::EmptyPassword`].
    pub fn validate(self) -> Result<Registration, AccountDomainError> {
        if self
            .confirm_password
            .as_ref()
            .is_some_and(|confirm| confirm != &self.password)
        {
            return Err(AccountDomainError::PasswordMismatch);
        }
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AccountDomainError::EmptyName);
        }
        let email = Email::new(self.email)?;
        if self.password.is_empty() {
            return Err(AccountDomainError::EmptyPassword);
        }
        Ok(Registration {
            name,
            email,
            password: self.password,
            role: self.role,
        })
    }
}

/// Validated registration, in the backend's `POST /register` body shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: Email,
    /// Plain-text password, hashed on storage.
    pub password: String,
    /// Team role.
    #[serde(default)]
    pub role: Role,
}
