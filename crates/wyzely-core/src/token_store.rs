// ── Refresh token persistence ──
//
// The Wyze cloud hands out a long-lived refresh token at login. It is
// cached as a bare string on disk so later invocations can skip the
// credential login entirely.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::CoreError;

/// Read the cached refresh token, if any.
///
/// A missing, empty, or unreadable file degrades to `None` -- the caller
/// falls back to a credential login.
pub fn load(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => {
            let token = raw.trim();
            if token.is_empty() {
                None
            } else {
                Some(token.to_owned())
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "refresh token cache unreadable");
            None
        }
    }
}

/// Persist the refresh token, creating parent directories as needed.
pub fn save(path: &Path, token: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| CoreError::TokenStore {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, token).map_err(|source| CoreError::TokenStore {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(&dir.path().join("refresh_token.txt")), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refresh_token.txt");
        save(&path, "rt-abc123").unwrap();
        assert_eq!(load(&path).as_deref(), Some("rt-abc123"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("refresh_token.txt");
        save(&path, "rt-abc123").unwrap();
        assert_eq!(load(&path).as_deref(), Some("rt-abc123"));
    }

    #[test]
    fn load_trims_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refresh_token.txt");
        fs::write(&path, "  rt-abc123\n").unwrap();
        assert_eq!(load(&path).as_deref(), Some("rt-abc123"));
    }

    #[test]
    fn load_treats_empty_file_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refresh_token.txt");
        fs::write(&path, "\n").unwrap();
        assert_eq!(load(&path), None);
    }
}
