use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {path}: {message}")]
    OutputDir { path: PathBuf, message: String },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ensure `dir` exists and is a directory. Missing directories are not created.
pub fn check_output_dir(dir: &Path) -> Result<(), PersistError> {
    let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;
    if !meta.is_dir() {
        return Err(PersistError::OutputDir {
            path: dir.to_path_buf(),
            message: "path is not a directory".into(),
        });
    }
    Ok(())
}

/// Atomically write content to a target path by writing a temp file next to
/// it, then renaming.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicFileWriter;

impl AtomicFileWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, target: &Path, content: &str) -> Result<PathBuf, PersistError> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        check_output_dir(&dir)?;

        let io_err = |source: io::Error| PersistError::Io {
            path: target.to_path_buf(),
            source,
        };
        if target.is_dir() {
            return Err(io_err(io::Error::other("target is a directory")));
        }

        let mut tmp = create_temp_file(&dir).map_err(io_err)?;
        // Keep the mode of a page being replaced.
        if let Ok(existing) = fs::metadata(target) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(io_err)?;
        }
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.flush().map_err(io_err)?;
        tmp.as_file_mut().sync_all().map_err(io_err)?;

        // persist() replaces an existing target.
        tmp.persist(target).map_err(|e| io_err(e.error))?;
        Ok(target.to_path_buf())
    }
}

/// Temp file created like a regular new file: mode 0o666 minus the umask.
#[cfg(unix)]
fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
