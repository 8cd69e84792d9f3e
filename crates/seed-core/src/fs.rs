//! Filesystem primitives used by the generators
//!
//! Every primitive checks the target before touching it and refuses to
//! clobber existing entries. None of them are atomic.

use crate::error::FsError;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Create `path` as a new directory (non-recursive)
pub fn ensure_dir_created(path: &Path) -> Result<(), FsError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            return Err(FsError::AlreadyExists {
                path: path.to_path_buf(),
            })
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(FsError::io("check directory", path, e)),
    }

    fs::create_dir(path).map_err(|e| FsError::io("create directory", path, e))
}

/// Create `path` as a new, empty file
pub fn ensure_file_created(path: &Path) -> Result<(), FsError> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_dir() => {
            return Err(FsError::AlreadyExists {
                path: path.to_path_buf(),
            })
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(FsError::io("check file", path, e)),
    }

    fs::File::create(path)
        .map(drop)
        .map_err(|e| FsError::io("create file", path, e))
}

/// Truncate an existing file and write `content` verbatim
pub fn overwrite_file(path: &Path, content: &str) -> Result<(), FsError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(FsError::io("check file", path, e)),
    };

    if meta.is_dir() {
        return Err(FsError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FsError::io("open file", path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| FsError::io("write to file", path, e))
}
