//! One comparison, start to finish: a [`CheckRequest`] goes in, a
//! [`CheckOutcome`] comes out. Nothing here touches window state.

use crate::compare;
use crate::error::CheckError;
use crate::file_ops;
use crate::models::{CheckOutcome, CheckRequest, Precondition, Verdict};
use std::path::PathBuf;

/// Returns the first missing input, without reading the file.
pub fn precondition(request: &CheckRequest) -> Option<Precondition> {
    let has_file = request
        .path
        .as_ref()
        .is_some_and(|p| !p.as_os_str().to_string_lossy().trim().is_empty());
    if !has_file {
        Some(Precondition::NoFile)
    } else if request.reference.trim().is_empty() {
        Some(Precondition::NoReference)
    } else {
        None
    }
}

pub fn run(request: CheckRequest) -> CheckOutcome {
    if let Some(missing) = precondition(&request) {
        tracing::debug!(?missing, "comparison skipped");
        return CheckOutcome::Missing(missing);
    }
    let CheckRequest { path, algorithm, reference } = request;
    let path = path.unwrap_or_default();

    let computed = match file_ops::compute_file_hash(&path, algorithm) {
        Ok(hex) => hex,
        Err(e) => return failure(path, e),
    };

    match compare::compare(&computed, &reference) {
        Ok(Verdict::Match) => {
            tracing::info!(%algorithm, path = %path.display(), "checksums match");
            CheckOutcome::Match { algorithm, digest: computed }
        }
        Ok(Verdict::Mismatch) => {
            tracing::info!(
                %algorithm,
                path = %path.display(),
                %computed,
                reference_len = reference.trim().len(),
                expected_len = algorithm.hex_len(),
                "checksum mismatch"
            );
            CheckOutcome::Mismatch { algorithm, computed }
        }
        Err(e) => failure(path, e),
    }
}

fn failure(path: PathBuf, err: CheckError) -> CheckOutcome {
    match err {
        CheckError::Precondition(p) => CheckOutcome::Missing(p),
        CheckError::FileAccess { .. } => {
            tracing::warn!(error = %err, "could not read file");
            CheckOutcome::FileError {
                path,
                reason: err.to_string(),
            }
        }
    }
}
