//! Users, authentication, and client sessions.
//!
//! Accounts are stored behind the [`ports::UserRepository`] port so the
//! backend can swap storage without touching the services. Clients keep the
//! result of a login in a [`ports::SessionStore`] that lapses after seven
//! days.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
