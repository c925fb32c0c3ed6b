//! User profiles and stored accounts.

use super::{AccountDomainError, Color, Email, Role, UserId};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Public user profile. Tasks reference users by [`UserId`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: Email,
    /// Team role.
    pub role: Role,
    /// Avatar image URL.
    pub avatar: String,
    /// Accent color.
    pub color: Color,
}

impl User {
    /// Creates a profile with a placeholder avatar in the given color.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyName`] when the name is blank.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: Email,
        role: Role,
        color: Color,
    ) -> Result<Self, AccountDomainError> {
        let name = validated_name(name.into())?;
        let avatar = placeholder_avatar(&color, &initials(&name));
        Ok(Self {
            id,
            name,
            email,
            role,
            avatar,
            color,
        })
    }
}

pub(super) fn validated_name(raw: String) -> Result<String, AccountDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AccountDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

/// Returns the upper-cased first letters of the first two words of `name`,
/// or `??` when the name has no words.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect();
    if letters.is_empty() {
        return "??".to_owned();
    }
    letters.to_uppercase()
}

/// Returns the placeholder avatar URL for a color and initials.
#[must_use]
pub fn placeholder_avatar(color: &Color, initials: &str) -> String {
    format!(
        "https://placehold.co/150x150/{}/ffffff?text={initials}",
        color.hex_digits()
    )
}

/// Salted SHA-256 password digest.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: String,
    digest: String,
}

impl PasswordHash {
    /// Hashes `password` with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyPassword`] for an empty password.
    pub fn create(password: &str) -> Result<Self, AccountDomainError> {
        if password.is_empty() {
            return Err(AccountDomainError::EmptyPassword);
        }
        let salt = Uuid::new_v4().simple().to_string();
        let digest = digest(&salt, password);
        Ok(Self { salt, digest })
    }

    /// Returns `true` when `password` matches this digest.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        digest(&self.salt, password) == self.digest
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// A stored account: the public profile plus its password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    user: User,
    password: PasswordHash,
}

impl UserAccount {
    /// Pairs a profile with its password digest.
    #[must_use]
    pub const fn new(user: User, password: PasswordHash) -> Self {
        Self { user, password }
    }

    /// Returns the public profile.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.user.id
    }

    /// Returns `true` when `password` matches.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        self.password.verify(password)
    }

    /// Applies a partial profile update. Absent fields keep their value.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError`] when a supplied field is invalid; the
    /// account is left unchanged.
    pub fn apply_update(&mut self, update: UserUpdate) -> Result<(), AccountDomainError> {
        let name = update.name.map(validated_name).transpose()?;
        let email = update.email.map(Email::new).transpose()?;
        let color = update.color.map(Color::new).transpose()?;
        let password = update
            .password
            .filter(|password| !password.is_empty())
            .map(|password| PasswordHash::create(&password))
            .transpose()?;

        if let Some(name) = name {
            self.user.name = name;
        }
        if let Some(email) = email {
            self.user.email = email;
        }
        if let Some(role) = update.role {
            self.user.role = role;
        }
        if let Some(color) = color {
            self.user.color = color;
        }
        if let Some(avatar) = update.avatar {
            self.user.avatar = avatar;
        }
        if let Some(password) = password {
            self.password = password;
        }
        Ok(())
    }
}

/// Partial profile update. `None` keeps the current value; an empty password
/// also keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// New avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// New color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
