//! Demo accounts for a fresh backend.

use crate::account::domain::{
    AccountDomainError, Color, Email, PasswordHash, Role, User, UserAccount, UserId,
};

const DEMO_ACCOUNTS: [(&str, &str, &str, &str, Role, &str); 4] = [
    ("1", "admin@kanban.com", "admin123", "Admin User", Role::Admin, "#FF69B4"),
    ("2", "user@kanban.com", "user123", "Regular User", Role::Developer, "#87CEEB"),
    ("3", "designer@kanban.com", "design123", "Dana Designer", Role::Designer, "#9370DB"),
    ("4", "john.smith@kanban.com", "john123", "John Smith", Role::Manager, "#FF4500"),
];

/// Returns the demo accounts the server starts with.
///
/// # Errors
///
/// Returns [`AccountDomainError`] if a demo record fails validation.
pub fn demo_accounts() -> Result<Vec<UserAccount>, AccountDomainError> {
    DEMO_ACCOUNTS
        .iter()
        .map(|&(id, email, password, name, role, color)| {
            let user = User::new(
                UserId::new(id),
                name,
                Email::new(email)?,
                role,
                Color::new(color)?,
            )?;
            Ok(UserAccount::new(user, PasswordHash::create(password)?))
        })
        .collect()
}
