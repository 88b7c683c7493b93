//! Log file allocation for recorded sessions.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve a leading `~` to the user's home directory.
pub fn resolve_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Pick the first unused `logN` name in `dir`, creating the directory if
/// needed. The file itself is not created; `script(1)` does that when the
/// recording starts.
pub fn allocate_log_file(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    let mut index = 1u32;
    loop {
        let candidate = dir.join(format!("log{index}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
        index += 1;
    }
}

/// Delete a log file; a file that is already gone is not an error.
pub fn delete_log_file(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("cannot delete {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_home_expands_tilde() {
        let resolved = resolve_home("~/.errwatch/logs");
        assert!(!resolved.to_string_lossy().contains('~'));
        assert!(resolved.ends_with(".errwatch/logs"));
    }

    #[test]
    fn test_resolve_home_leaves_absolute_paths() {
        assert_eq!(resolve_home("/var/log"), PathBuf::from("/var/log"));
    }

    #[test]
    fn test_allocate_first_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let path = allocate_log_file(&logs).unwrap();
        assert_eq!(path, logs.join("log1"));
        // directory was created, file was not
        assert!(logs.is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_allocate_skips_existing_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("log1"), "").unwrap();
        std::fs::write(dir.path().join("log2"), "").unwrap();
        let path = allocate_log_file(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("log3"));
    }

    #[test]
    fn test_delete_log_file_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone");
        assert!(delete_log_file(&path).is_ok());
        std::fs::write(&path, "data").unwrap();
        assert!(delete_log_file(&path).is_ok());
        assert!(!path.exists());
    }
}
