use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::atomic_write_private;
use crate::paths;

/// Persistent key/value storage for sensitive strings.
pub trait SecretStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn store(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Returns `true` if a value was present.
    fn delete(&mut self, key: &str) -> Result<bool>;
}

/// Secret store backed by a TOML file readable by its owner only.
///
/// Every write goes straight to disk.
#[derive(Debug)]
pub struct FileSecretStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSecretStore {
    /// Opens the store at the default location (see [`paths::credentials_path`]).
    pub fn open_default() -> Result<Self> {
        Self::open(paths::credentials_path()?)
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries: BTreeMap<String, String> = if path.exists() {
            let contents = fs::read_to_string(&path).with_context(|| {
                format!("Failed to read credentials file: {}", path.display())
            })?;
            toml::from_str(&contents).with_context(|| {
                format!("Failed to parse credentials file: {}", path.display())
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened secret store");

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(&self.entries).context("Failed to serialize credentials")?;

        atomic_write_private(&self.path, &contents)
    }
}

impl SecretStore for FileSecretStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        if self.entries.remove(key).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}

/// In-memory secret store, for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySecretStore {
    entries: BTreeMap<String, String>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl SecretStore for MemorySecretStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
