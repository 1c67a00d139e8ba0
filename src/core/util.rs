//! Common utilities

use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Extensions that imply C++ headers (no `.h` appended)
const CPP_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx"];

/// Compute an xxh3 hash of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Whether the path names a C++ source or header file
pub fn is_cpp_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            CPP_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
