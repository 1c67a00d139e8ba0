//! Reading and writing source files
//!
//! Files are read as UTF-8 and written back byte-for-byte. Lossy decoding is
//! not used since the contents are written back to the same path.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::IncludeError;

/// Read a source file as text
pub fn read_source(path: &Path) -> Result<String, IncludeError> {
    let unreadable = |source| IncludeError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let bytes = fs::read(path).map_err(unreadable)?;
    String::from_utf8(bytes).map_err(|e| unreadable(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Replace the contents of a source file
pub fn write_source(path: &Path, contents: &str) -> Result<(), IncludeError> {
    fs::write(path, contents).map_err(|source| IncludeError::FileUnwritable {
        path: path.to_path_buf(),
        source,
    })
}
