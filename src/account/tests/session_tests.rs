//! Tests for client sessions and the session stores.

use std::sync::{Arc, Mutex, PoisonError};

use crate::account::{
    adapters::{file::FileSessionStore, memory::InMemorySessionStore},
    domain::{AuthGrant, Color, Email, Role, SessionToken, User, UserId},
    ports::{SessionStore, SessionStoreError},
    services::SessionManager,
};
use camino::Utf8PathBuf;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use eyre::{bail, ensure};
use mockable::Clock;
use rstest::{fixture, rstest};

/// Clock pinned to an instant that tests move forward by hand.
struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[fixture]
fn clock() -> Arc<FixedClock> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default();
    Arc::new(FixedClock::at(start))
}

fn user(name: &str) -> eyre::Result<User> {
    Ok(User::new(
        UserId::new("2"),
        name,
        Email::new("user@kanban.com")?,
        Role::Developer,
        Color::new("#87CEEB")?,
    )?)
}

fn grant() -> eyre::Result<AuthGrant> {
    Ok(AuthGrant {
        user: user("Regular User")?,
        token: SessionToken::new("token-1"),
    })
}

type MemorySessions = SessionManager<InMemorySessionStore, FixedClock>;

fn manager(clock: &Arc<FixedClock>) -> MemorySessions {
    SessionManager::new(Arc::new(InMemorySessionStore::new()), Arc::clone(clock))
}

#[rstest]
fn begin_stores_a_seven_day_session(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let sessions = manager(&clock);
    let session = sessions.begin(grant()?)?;
    ensure!(session.expires_at() == clock.utc() + TimeDelta::days(7));
    ensure!(sessions.is_authenticated()?);
    ensure!(sessions.current_user()?.map(|user| user.name) == Some("Regular User".to_owned()));
    Ok(())
}

#[rstest]
#[case(TimeDelta::days(6), true)]
#[case(TimeDelta::days(7) - TimeDelta::seconds(1), true)]
#[case(TimeDelta::days(7), false)]
#[case(TimeDelta::days(30), false)]
fn sessions_lapse_after_seven_days(
    clock: Arc<FixedClock>,
    #[case] elapsed: TimeDelta,
    #[case] live: bool,
) -> eyre::Result<()> {
    let sessions = manager(&clock);
    sessions.begin(grant()?)?;
    clock.advance(elapsed);
    ensure!(sessions.is_authenticated()? == live);
    Ok(())
}

#[rstest]
fn expired_sessions_are_cleared_from_the_store(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let store = Arc::new(InMemorySessionStore::new());
    let sessions = SessionManager::new(Arc::clone(&store), Arc::clone(&clock));
    sessions.begin(grant()?)?;
    clock.advance(TimeDelta::days(8));
    ensure!(sessions.current()?.is_none());
    ensure!(store.load()?.is_none());
    Ok(())
}

#[rstest]
fn refresh_user_keeps_expiry(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let sessions = manager(&clock);
    let started = sessions.begin(grant()?)?;
    clock.advance(TimeDelta::days(3));
    let Some(refreshed) = sessions.refresh_user(user("Renamed User")?)? else {
        bail!("session should still be live");
    };
    ensure!(refreshed.expires_at() == started.expires_at());
    ensure!(refreshed.token() == started.token());
    ensure!(sessions.current_user()?.map(|user| user.name) == Some("Renamed User".to_owned()));
    Ok(())
}

#[rstest]
fn refresh_without_session_does_nothing(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let sessions = manager(&clock);
    ensure!(sessions.refresh_user(user("Nobody")?)?.is_none());
    ensure!(!sessions.is_authenticated()?);
    Ok(())
}

#[rstest]
fn logout_clears_the_session(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let sessions = manager(&clock);
    sessions.begin(grant()?)?;
    sessions.logout()?;
    ensure!(!sessions.is_authenticated()?);
    sessions.logout()?;
    Ok(())
}

fn temp_store() -> eyre::Result<(tempfile::TempDir, FileSessionStore)> {
    let temp = tempfile::tempdir()?;
    let dir = Utf8PathBuf::from_path_buf(temp.path().join("session"))
        .map_err(|path| eyre::eyre!("non-UTF-8 temp path: {}", path.display()))?;
    Ok((temp, FileSessionStore::new(dir)))
}

#[rstest]
fn file_store_survives_a_new_handle(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let (_temp, store) = temp_store()?;
    let sessions = SessionManager::new(Arc::new(store.clone()), Arc::clone(&clock));
    let session = sessions.begin(grant()?)?;

    let reopened = FileSessionStore::new(store.dir().to_owned());
    ensure!(reopened.load()? == Some(session));
    Ok(())
}

#[rstest]
fn file_store_is_empty_before_first_save() -> eyre::Result<()> {
    let (_temp, store) = temp_store()?;
    ensure!(store.load()?.is_none());
    store.clear()?;
    Ok(())
}

#[rstest]
fn file_store_clear_removes_the_session(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let (_temp, store) = temp_store()?;
    let sessions = SessionManager::new(Arc::new(store.clone()), Arc::clone(&clock));
    sessions.begin(grant()?)?;
    sessions.logout()?;
    ensure!(store.load()?.is_none());
    Ok(())
}

#[rstest]
fn file_store_reports_corrupt_contents() -> eyre::Result<()> {
    let (temp, store) = temp_store()?;
    let dir = temp.path().join("session");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("session.json"), "{ not json")?;
    match store.load() {
        Err(SessionStoreError::Corrupt(_)) => Ok(()),
        other => bail!("expected Corrupt, got {other:?}"),
    }
}
