//! File system helpers for persisted data records
//!
//! Every record lives at `<dir>/<key>.json`, where `<dir>` is either the
//! configured base data directory or a per-call override. Writes go through a
//! temporary sibling file followed by a rename so a reader never sees a
//! partially written record.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{Result, YahooError};

/// Extension used for every stored record.
pub const DATA_FILE_EXTENSION: &str = "json";

/// Check that a logical key maps onto exactly one file inside its directory.
pub fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        Some("key is empty")
    } else if key == "." || key == ".." {
        Some("key is a reserved path component")
    } else if key.contains(['/', '\\']) {
        Some("key contains a path separator")
    } else if key.contains('\0') {
        Some("key contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(YahooError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Path: {new_data_dir or base_dir}/{key}.json
pub fn data_file_path(base_dir: &Path, new_data_dir: Option<&Path>, key: &str) -> PathBuf {
    new_data_dir
        .unwrap_or(base_dir)
        .join(format!("{}.{}", key, DATA_FILE_EXTENSION))
}

/// Read a file into a String, `Ok(None)` when it does not exist
pub fn try_read_to_string(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write a string to file via a temporary sibling and an atomic rename
pub fn write_string_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension(format!("{}.tmp", DATA_FILE_EXTENSION));
    let result = (|| {
        let mut f = fs::File::create(&temp_path)?;
        f.write_all(contents.as_bytes())?;
        f.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_file_path_uses_base_dir() {
        let path = data_file_path(Path::new("/data"), None, "nfl-game_keys");
        assert_eq!(path, PathBuf::from("/data/nfl-game_keys.json"));
    }

    #[test]
    fn test_data_file_path_prefers_override() {
        let path = data_file_path(
            Path::new("/data"),
            Some(Path::new("/data/2023")),
            "423-game-info",
        );
        assert_eq!(path, PathBuf::from("/data/2023/423-game-info.json"));
    }

    #[test]
    fn test_data_file_path_is_deterministic() {
        let a = data_file_path(Path::new("/data"), None, "current-game-info");
        let b = data_file_path(Path::new("/data"), None, "current-game-info");
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate_key_accepts_dotted_names() {
        assert!(validate_key("nfl-game_keys").is_ok());
        assert!(validate_key("423.l.12345-league").is_ok());
        assert!(validate_key("équipe").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_bad_keys() {
        for key in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
            match validate_key(key) {
                Err(YahooError::InvalidKey { key: k, .. }) => assert_eq!(k, key),
                other => panic!("Expected InvalidKey for {:?}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_try_read_to_string_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.json");

        fs::write(&file_path, "{\"hello\": \"world\"}").unwrap();

        let content = try_read_to_string(&file_path).unwrap();
        assert_eq!(content, Some("{\"hello\": \"world\"}".to_string()));
    }

    #[test]
    fn test_try_read_to_string_nonexistent_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.json");

        let content = try_read_to_string(&file_path).unwrap();
        assert_eq!(content, None);
        assert!(!file_path.exists());
    }

    #[test]
    fn test_write_string_atomic_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("2023").join("output.json");

        write_string_atomic(&file_path, "[1, 2, 3]").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "[1, 2, 3]");
    }

    #[test]
    fn test_write_string_atomic_overwrites_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("output.json");

        write_string_atomic(&file_path, "first").unwrap();
        write_string_atomic(&file_path, "second").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "second");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
