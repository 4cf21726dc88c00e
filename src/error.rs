//! Errors at the file boundary.
//!
//! The pipeline itself never fails; these only cover getting source text in.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Largest source file accepted (100 MB).
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("'{}' is too large ({size} bytes, max {max} bytes)", path.display(), max = MAX_SOURCE_SIZE)]
    TooLarge { path: PathBuf, size: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read a source file, refusing files over [`MAX_SOURCE_SIZE`].
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let io = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io)?.len();
    if size > MAX_SOURCE_SIZE {
        return Err(Error::TooLarge {
            path: path.to_path_buf(),
            size,
        });
    }

    let bytes = fs::read(path).map_err(io)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = read_source("definitely/not/here.j").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("cannot read 'definitely/not/here.j'"));
    }

    #[test]
    fn test_invalid_utf8() {
        let path = std::env::temp_dir().join(format!("jass-invalid-{}.j", std::process::id()));
        fs::write(&path, [0x66, 0xff, 0xfe]).unwrap();
        let err = read_source(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }
}
