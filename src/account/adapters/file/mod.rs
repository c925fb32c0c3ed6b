//! Session store persisted as a JSON file.
//!
//! Plays the part of the browser cookie jar for command-line clients: the
//! session survives between invocations until it expires or the user logs
//! out.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::account::{
    domain::Session,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

const SESSION_FILE: &str = "session.json";

/// File-backed session store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: Utf8PathBuf,
}

impl FileSessionStore {
    /// Creates a store writing `session.json` under `dir`. The directory is
    /// created on first save.
    #[must_use]
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the session file.
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    fn open(&self) -> io::Result<Dir> {
        Dir::open_ambient_dir(&self.dir, ambient_authority())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionStoreResult<Option<Session>> {
        let dir = match self.open() {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionStoreError::storage(err)),
        };
        let contents = match dir.read_to_string(SESSION_FILE) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionStoreError::storage(err)),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|err| SessionStoreError::Corrupt(err.to_string()))
    }

    fn save(&self, session: &Session) -> SessionStoreResult<()> {
        Dir::create_ambient_dir_all(&self.dir, ambient_authority())
            .map_err(SessionStoreError::storage)?;
        let dir = self.open().map_err(SessionStoreError::storage)?;
        let contents =
            serde_json::to_vec_pretty(session).map_err(SessionStoreError::storage)?;
        dir.write(SESSION_FILE, contents)
            .map_err(SessionStoreError::storage)
    }

    fn clear(&self) -> SessionStoreResult<()> {
        let dir = match self.open() {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(SessionStoreError::storage(err)),
        };
        match dir.remove_file(SESSION_FILE) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::storage(err)),
        }
    }
}
