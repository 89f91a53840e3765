//! Atomic file output
//!
//! Bytes go to a uniquely named temporary file in the destination directory,
//! which is then renamed over the destination. The temporary file is removed
//! on any failure, so neither the destination nor its directory ever holds a
//! partial image. On unix the file is created owner-only (0600).

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{ExportError, Result};

/// Write `bytes` to `path`, replacing any existing file
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    write_and_persist(path, bytes).map_err(|source| ExportError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_and_persist(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    // On failure the returned NamedTempFile is dropped, deleting it.
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_and_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.png");

        write_atomic(&path, b"first").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");

        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert_eq!(entries(temp_dir.path()), vec!["out.png"]);
    }

    #[test]
    fn test_missing_directory_reports_os_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("out.png");

        let err = write_atomic(&path, b"data").unwrap_err();
        match err {
            ExportError::FileWrite { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_rename_failure_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory at the destination makes the rename fail.
        let path = temp_dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let err = write_atomic(&path, b"data").unwrap_err();

        assert!(matches!(err, ExportError::FileWrite { .. }));
        assert_eq!(entries(temp_dir.path()), vec!["taken"]);
        assert!(path.join("keep").is_file());
    }

    #[test]
    fn test_neighbouring_files_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wallet_qr.png");
        let neighbour = temp_dir.path().join("wallet_qr.png.tmp");
        fs::write(&neighbour, b"user data").unwrap();

        write_atomic(&path, b"image").unwrap();

        assert_eq!(fs::read(&neighbour).unwrap(), b"user data");
        assert_eq!(entries(temp_dir.path()), vec!["wallet_qr.png", "wallet_qr.png.tmp"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wallet_qr.png");
        fs::write(&path, b"old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, b"image").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
