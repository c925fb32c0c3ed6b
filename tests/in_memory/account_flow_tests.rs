//! Registration and login feeding a client session.

use std::sync::Arc;

use kanban::account::{
    adapters::memory::{InMemorySessionStore, InMemoryUserRepository},
    domain::{RegisterRequest, UserUpdate},
    services::{AccountService, SessionManager, demo_accounts},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type Sessions = SessionManager<InMemorySessionStore, DefaultClock>;

#[fixture]
fn accounts() -> eyre::Result<AccountService<InMemoryUserRepository>> {
    Ok(AccountService::new(Arc::new(
        InMemoryUserRepository::with_accounts(demo_accounts()?),
    )))
}

#[fixture]
fn sessions() -> Sessions {
    SessionManager::new(Arc::new(InMemorySessionStore::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_then_profile_update_refreshes_session(
    accounts: eyre::Result<AccountService<InMemoryUserRepository>>,
    sessions: Sessions,
) -> eyre::Result<()> {
    let accounts = accounts?;
    let grant = accounts.login("designer@kanban.com", "design123").await?;
    let session = sessions.begin(grant)?;

    let update = UserUpdate {
        name: Some("Dana D.".to_owned()),
        ..UserUpdate::default()
    };
    let user = accounts.update_user(&session.user().id, update).await?;
    sessions.refresh_user(user)?;

    let current = sessions
        .current()?
        .ok_or_else(|| eyre::eyre!("session should be live"))?;
    eyre::ensure!(current.user().name == "Dana D.");
    eyre::ensure!(current.expires_at() == session.expires_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_signs_the_user_in(
    accounts: eyre::Result<AccountService<InMemoryUserRepository>>,
    sessions: Sessions,
) -> eyre::Result<()> {
    let registration = RegisterRequest::new("New Person", "new@kanban.com", "pw")
        .with_confirmation("pw")
        .validate()?;
    let grant = accounts?.register(registration).await?;
    sessions.begin(grant)?;
    let user = sessions
        .current_user()?
        .ok_or_else(|| eyre::eyre!("expected a signed-in user"))?;
    eyre::ensure!(user.email.as_str() == "new@kanban.com");
    Ok(())
}
