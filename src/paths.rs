//! XDG-style path utilities for the credentials store.
//!
//! Paths follow XDG Base Directory conventions on every platform rather
//! than OS-specific locations, so the store is easy to find and remove.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable that points the secret store at an explicit file.
pub const CREDENTIALS_ENV: &str = "COMMENTI_CREDENTIALS";

/// Returns the configuration directory for commenti.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/commenti` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/commenti` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("commenti")),
        _ => Ok(home_dir()?.join(".config").join("commenti")),
    }
}

/// Returns the path of the credentials file.
///
/// `$COMMENTI_CREDENTIALS` wins over the config directory.
pub fn credentials_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIALS_ENV)
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("credentials.toml"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(key: &str, value: Option<&str>, f: F) {
        let original = std::env::var(key).ok();
        match value {
            Some(v) => unsafe { std::env::set_var(key, v) },
            None => unsafe { std::env::remove_var(key) },
        }

        f();

        match original {
            Some(v) => unsafe { std::env::set_var(key, v) },
            None => unsafe { std::env::remove_var(key) },
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_env("XDG_CONFIG_HOME", None, || {
            let dir = config_dir().unwrap();
            assert!(dir.ends_with(".config/commenti"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_env("XDG_CONFIG_HOME", Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/commenti"));
        });
    }

    #[test]
    #[serial]
    fn test_credentials_path_in_config_dir() {
        with_env(CREDENTIALS_ENV, None, || {
            with_env("XDG_CONFIG_HOME", Some("/custom/config"), || {
                assert_eq!(
                    credentials_path().unwrap(),
                    PathBuf::from("/custom/config/commenti/credentials.toml")
                );
            });
        });
    }

    #[test]
    #[serial]
    fn test_credentials_path_env_override() {
        with_env(CREDENTIALS_ENV, Some("/tmp/secrets.toml"), || {
            assert_eq!(credentials_path().unwrap(), PathBuf::from("/tmp/secrets.toml"));
        });
    }
}
