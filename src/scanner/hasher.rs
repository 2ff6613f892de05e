//! BLAKE3 file hasher with streaming support.
//!
//! Computes the hash of a file's full contents without loading the file
//! into memory at once. The digest algorithm is an implementation detail
//! of the report format; BLAKE3 is stable and collision-resistant, which
//! is all duplicate detection needs.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::HashError;

/// Hash a file's full byte content, returning the lowercase hex digest.
///
/// # Errors
///
/// Returns [`HashError`] if the file cannot be opened or read. Hashing
/// failures are fatal to the scan; callers propagate them.
pub fn hash_file(path: &Path) -> Result<String, HashError> {
    let file = File::open(path).map_err(|e| map_io_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut reader, &mut hasher).map_err(|e| map_io_error(path, e))?;
    Ok(hasher.finalize().to_hex().to_string())
}

/// Classify an I/O error into the hashing error taxonomy.
fn map_io_error(path: &Path, error: io::Error) -> HashError {
    use io::ErrorKind;

    match error.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: error,
        },
    }
}
