//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem. A rewrite interrupted halfway leaves the original intact.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}

/// Like [`atomic_write`], but the file is readable by the owner only.
///
/// Used for the credentials store.
pub fn atomic_write_private(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600)).with_context(|| {
            format!("Failed to restrict permissions: {}", temp_path.display())
        })?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    parent.join(format!(".{file_name}.tmp"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("main.rs");

        fs::write(&file_path, "// قدیمی\n").unwrap();
        atomic_write(&file_path, "// old\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// old\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("main.rs");

        atomic_write(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join(".main.rs.tmp").exists());
    }

    #[test]
    fn test_temp_path_for_bare_file_name() {
        assert_eq!(temp_path_for(Path::new("lib.rs")), PathBuf::from("./.lib.rs.tmp"));
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_private_sets_owner_only_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("credentials.toml");

        atomic_write_private(&file_path, "api_key = \"k\"\n").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
