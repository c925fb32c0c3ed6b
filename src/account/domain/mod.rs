//! Domain model for users, accounts, and sessions.

mod envelope;
mod error;
mod ids;
mod registration;
mod role;
mod session;
mod user;

pub use envelope::{AuthResponse, LoginBody};
pub use error::{AccountDomainError, ParseRoleError};
pub use ids::{Color, Email, UserId};
pub use registration::{RegisterRequest, Registration};
pub use role::Role;
pub use session::{AuthGrant, SESSION_TTL_DAYS, Session, SessionToken};
pub use user::{PasswordHash, User, UserAccount, UserUpdate, initials, placeholder_avatar};
