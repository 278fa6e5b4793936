use crate::error::CheckError;
use crate::hashers;
use crate::models::Algorithm;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Compute hash of the file at path using streaming read.
/// This is synchronous; the window runs it on a blocking worker.
pub fn compute_file_hash(path: &Path, algo: Algorithm) -> Result<String, CheckError> {
    let f = File::open(path).map_err(|source| access_error(path, source))?;
    hash_opened(path, BufReader::new(f), algo)
}

/// Hash an already opened file; read errors are reported against `path`.
fn hash_opened<R: Read>(path: &Path, reader: R, algo: Algorithm) -> Result<String, CheckError> {
    let hex = hashers::compute_hash_for_reader(reader, algo)
        .map_err(|source| access_error(path, source))?;
    tracing::debug!(algorithm = %algo, path = %path.display(), digest = %hex, "computed digest");
    Ok(hex)
}

fn access_error(path: &Path, source: std::io::Error) -> CheckError {
    CheckError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}
