//! Application services for accounts and sessions.

mod accounts;
mod seed;
mod session;

pub use accounts::{AccountError, AccountResult, AccountService};
pub use seed::demo_accounts;
pub use session::SessionManager;
