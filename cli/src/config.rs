//! Credentials persisted between invocations, stored as JSON in the user's configuration directory.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read configuration file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse configuration file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to serialize configuration")]
    Serialize(#[source] serde_json::Error),
    #[error("unable to write configuration file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub app_secret: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,
}

/// Loads and saves the [`Credentials`] at a fixed location
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    credentials: Credentials,
}

impl Store {
    /// Default location of the configuration file: `~/.config/valboks-cli/config.json` on Linux.
    pub fn default_path() -> PathBuf {
        if let Some(cfg_dir) = dirs::config_dir() {
            cfg_dir.join("valboks-cli").join("config.json")
        } else {
            PathBuf::from(".valboks-cli.json")
        }
    }

    /// Creates an empty store, nothing is read from disk.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            credentials: Credentials::default(),
        }
    }

    /// Loads the credentials, a missing file giving empty credentials.
    pub fn load(path: PathBuf) -> Result<Self, Error> {
        let credentials = match std::fs::read(&path) {
            Ok(content) => serde_json::from_slice(&content).map_err(|source| Error::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no configuration found at {path:?}");
                Credentials::default()
            }
            Err(source) => return Err(Error::Read { path, source }),
        };
        Ok(Self { path, credentials })
    }

    /// Writes the credentials to a temporary file next to the target, readable only by the user,
    /// and moves it over the target so that a failure never leaves a partial file.
    pub fn save(&self) -> Result<(), Error> {
        let content = serde_json::to_vec_pretty(&self.credentials).map_err(Error::Serialize)?;
        let write_error = |source| Error::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir(parent).map_err(write_error)?;
        }
        let tmp_path = self.tmp_path();
        if let Err(err) = write_private(&tmp_path, &content) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_error(err));
        }
        if let Err(err) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_error(err));
        }
        tracing::debug!("configuration saved to {:?}", self.path);
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|value| value.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_configured(&self) -> bool {
        !self.credentials.access_token.is_empty()
    }

    pub fn set_credentials(
        &mut self,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) {
        self.credentials.app_key = app_key.into();
        self.credentials.app_secret = app_secret.into();
        self.credentials.access_token = access_token.into();
    }

    pub fn set_tokens(&mut self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        self.credentials.access_token = access_token.into();
        self.credentials.refresh_token = refresh_token.into();
    }
}

#[cfg(unix)]
fn create_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        // the mode is only applied on creation
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(content)?;
    file.sync_all()
}
