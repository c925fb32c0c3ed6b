//! Runtime configuration for the client and server binaries.
//!
//! Configuration comes from an optional TOML file. Every section and key is
//! optional; missing values fall back to the defaults below. The
//! `KANBAN_BACKEND_URL` and `KANBAN_LOG` environment variables take
//! precedence over the file.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

use crate::account::domain::SESSION_TTL_DAYS;

/// Environment variable overriding [`BackendConfig::base_url`].
pub const BACKEND_URL_ENV: &str = "KANBAN_BACKEND_URL";

/// Environment variable overriding [`LogConfig::filter`].
pub const LOG_FILTER_ENV: &str = "KANBAN_LOG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid configuration TOML.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed.
        path: Utf8PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    /// Where clients find the backend.
    pub backend: BackendConfig,
    /// Where the server listens.
    pub server: ServerConfig,
    /// Client session storage.
    pub session: SessionConfig,
    /// Log filtering.
    pub log: LogConfig,
}

/// `[backend]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the REST backend.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_owned(),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server binds.
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:3001".to_owned(),
        }
    }
}

/// `[session]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the client's session file.
    pub dir: Utf8PathBuf,
    /// Days a session stays valid after login.
    pub ttl_days: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: Utf8PathBuf::from(".kanban"),
            ttl_days: SESSION_TTL_DAYS,
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

impl KanbanConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`toml::de::Error`] when the text is not valid configuration.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads `path`, or the defaults when `path` does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = match read_file(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(%path, "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Applies overrides read through `lookup`, typically the process
    /// environment. Empty values are ignored.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|value| !value.is_empty()) {
            self.backend.base_url = url;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|value| !value.is_empty()) {
            self.log.filter = filter;
        }
        self
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let file = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path does not name a file")
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Dir::open_ambient_dir(parent, ambient_authority())?.read_to_string(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_file_yields_defaults() -> eyre::Result<()> {
        let config = KanbanConfig::from_toml("")?;
        eyre::ensure!(config == KanbanConfig::default());
        eyre::ensure!(config.session.ttl_days == 7);
        Ok(())
    }

    #[rstest]
    fn partial_sections_keep_other_defaults() -> eyre::Result<()> {
        let config = KanbanConfig::from_toml(
            r#"
            [backend]
            base_url = "http://kanban.test"

            [session]
            ttl_days = 1
            "#,
        )?;
        eyre::ensure!(config.backend.base_url == "http://kanban.test");
        eyre::ensure!(config.session.ttl_days == 1);
        eyre::ensure!(config.session.dir == Utf8PathBuf::from(".kanban"));
        eyre::ensure!(config.server == ServerConfig::default());
        Ok(())
    }

    #[rstest]
    #[case(Some("http://override.test"), "http://override.test")]
    #[case(Some(""), "http://localhost:3001")]
    #[case(None, "http://localhost:3001")]
    fn backend_url_override(#[case] value: Option<&str>, #[case] expected: &str) {
        let config = KanbanConfig::default().with_overrides(|key| {
            (key == BACKEND_URL_ENV)
                .then_some(value)
                .flatten()
                .map(str::to_owned)
        });
        assert_eq!(config.backend.base_url, expected);
        assert_eq!(config.log.filter, "info");
    }

    fn utf8(path: std::path::PathBuf) -> eyre::Result<Utf8PathBuf> {
        Utf8PathBuf::from_path_buf(path)
            .map_err(|path| eyre::eyre!("non-UTF-8 temp path: {}", path.display()))
    }

    #[rstest]
    #[case("absent.toml")]
    #[case("missing-dir/absent.toml")]
    fn missing_file_yields_defaults(#[case] relative: &str) -> eyre::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = utf8(temp.path().join(relative))?;
        eyre::ensure!(KanbanConfig::load(&path)? == KanbanConfig::default());
        Ok(())
    }

    #[rstest]
    fn existing_file_is_loaded() -> eyre::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = utf8(temp.path().join("kanban.toml"))?;
        std::fs::write(&path, "[server]\nlisten = \"0.0.0.0:8080\"\n")?;
        let config = KanbanConfig::load(&path)?;
        eyre::ensure!(config.server.listen == "0.0.0.0:8080");
        eyre::ensure!(config.backend == BackendConfig::default());
        Ok(())
    }

    #[rstest]
    fn malformed_file_is_reported() -> eyre::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = utf8(temp.path().join("kanban.toml"))?;
        std::fs::write(&path, "[server\nlisten = 1")?;
        match KanbanConfig::load(&path) {
            Err(ConfigError::Parse { .. }) => Ok(()),
            other => Err(eyre::eyre!("expected parse error, got {other:?}")),
        }
    }
}
