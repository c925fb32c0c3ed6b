//! In-memory account and session adapters.

mod session;
mod user;

pub use session::InMemorySessionStore;
pub use user::InMemoryUserRepository;
