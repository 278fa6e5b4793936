use std::fmt;
use std::path::PathBuf;

use crate::hashers::RunningDigest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Md5,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Selector order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha256, Algorithm::Sha512];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Length of the hex-encoded digest.
    pub fn hex_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha256 => 64,
            Algorithm::Sha512 => 128,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "Legacy, not recommended for security",
            Algorithm::Sha256 => "Industry standard, widely used",
            Algorithm::Sha512 => "Higher security, larger output",
        }
    }

    /// Fresh streaming state for this algorithm.
    pub fn start(&self) -> RunningDigest {
        RunningDigest::new(*self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

/// Input the operator still has to provide before a comparison can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    NoFile,
    NoReference,
}

impl Precondition {
    pub fn guidance(&self) -> &'static str {
        match self {
            Precondition::NoFile => "Please select a file first.",
            Precondition::NoReference => "Please enter a reference checksum.",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Precondition::NoFile => "No file",
            Precondition::NoReference => "No reference",
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.guidance())
    }
}

/// Everything one comparison needs, handed from the window to the checker.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub path: Option<PathBuf>,
    pub algorithm: Algorithm,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Match { algorithm: Algorithm, digest: String },
    Mismatch { algorithm: Algorithm, computed: String },
    Missing(Precondition),
    FileError { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Error,
}

impl CheckOutcome {
    /// Text shown in the result label.
    pub fn message(&self) -> String {
        match self {
            CheckOutcome::Match { .. } => "✅ Checksums match!".to_string(),
            CheckOutcome::Mismatch { algorithm, computed } => format!(
                "❌ Checksums do NOT match.\nCalculated ({}):\n{}",
                algorithm, computed
            ),
            CheckOutcome::Missing(p) => p.guidance().to_string(),
            CheckOutcome::FileError { reason, .. } => format!("Could not read file:\n{}", reason),
        }
    }

    /// Title and level of the native message box, for outcomes that raise one.
    pub fn dialog(&self) -> Option<(&'static str, DialogLevel)> {
        match self {
            CheckOutcome::Match { .. } | CheckOutcome::Mismatch { .. } => None,
            CheckOutcome::Missing(p) => Some((p.title(), DialogLevel::Info)),
            CheckOutcome::FileError { .. } => Some(("File Error", DialogLevel::Error)),
        }
    }
}
