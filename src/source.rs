//! Byte source: turns a file reference into its complete byte content.
//!
//! Validators always fetch the whole buffer before evaluating any signature;
//! there is no streaming or partial-read path. `std::io::ErrorKind` carries
//! the failure taxonomy (not found, permission denied, generic I/O).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies the raw content of one candidate file.
pub trait ByteSource {
    /// Read the complete content, or fail with an I/O error.
    fn read_all(&self) -> io::Result<Vec<u8>>;
}

/// Whole-file read; the handle is scoped inside `fs::read` and released on
/// every path, including failure.
impl ByteSource for Path {
    fn read_all(&self) -> io::Result<Vec<u8>> {
        fs::read(self)
    }
}

impl ByteSource for PathBuf {
    fn read_all(&self) -> io::Result<Vec<u8>> {
        fs::read(self)
    }
}

/// In-memory source, useful for tests and callers that already hold the bytes.
impl ByteSource for [u8] {
    fn read_all(&self) -> io::Result<Vec<u8>> {
        Ok(self.to_vec())
    }
}

impl ByteSource for Vec<u8> {
    fn read_all(&self) -> io::Result<Vec<u8>> {
        Ok(self.clone())
    }
}
