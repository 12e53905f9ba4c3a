//! Report directory persistence: write/read/verify a run report on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json          canonical JSON report bytes
//!   report_digest.txt    ASCII digest string (e.g. "sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing `report.json` or `report_digest.txt` → error
//! - Any other file in the directory → error
//! - `report.json` not in canonical form → error
//! - Unknown `schema_version` → error
//! - Stored digest differs from the recomputed one → error

use std::collections::BTreeSet;
use std::path::Path;

use crate::digest::{canonical_hash, canonical_json_bytes, CanonError, ContentHash};
use crate::runner::{report_domain, CanonicalReport};

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

/// Error writing or reading a report directory.
#[derive(Debug, thiserror::Error)]
pub enum ReportDirError {
    /// I/O error.
    #[error("I/O error: {detail}")]
    Io { detail: String },
    /// A required file is missing.
    #[error("missing file: {filename}")]
    MissingFile { filename: String },
    /// An undeclared file exists in the directory.
    #[error("undeclared extra file: {name}")]
    ExtraFile { name: String },
    /// `report.json` is not valid JSON or lacks a `schema_version`.
    #[error("report parse error: {detail}")]
    ParseError { detail: String },
    /// `report.json` is valid JSON but not in canonical form.
    #[error("report.json is not canonical JSON")]
    NonCanonical,
    /// `schema_version` names no known report kind.
    #[error("unknown report schema: {found}")]
    UnknownSchema { found: String },
    /// `report_digest.txt` does not match the recomputed digest.
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
    /// Canonical JSON error during re-canonicalization.
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// A report loaded and verified from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReportV1 {
    pub schema_version: String,
    /// Parsed report.
    pub value: serde_json::Value,
    /// Raw canonical bytes as stored.
    pub bytes: Vec<u8>,
    /// Recomputed digest (equal to the stored one).
    pub digest: ContentHash,
}

/// Write `report` into `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`ReportDirError::Io`] on any filesystem failure.
pub fn write_report_dir<R: CanonicalReport>(report: &R, dir: &Path) -> Result<(), ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    write_atomic(&dir.join(REPORT_FILENAME), report.canonical_bytes())?;
    write_atomic(&dir.join(DIGEST_FILENAME), report.digest().as_str().as_bytes())?;

    tracing::debug!(
        dir = %dir.display(),
        schema_version = report.schema_version(),
        digest = report.digest().as_str(),
        "report written"
    );
    Ok(())
}

/// Read and verify a report directory.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn read_report_dir(dir: &Path) -> Result<StoredReportV1, ReportDirError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    for filename in list_files(dir)? {
        if filename != REPORT_FILENAME && filename != DIGEST_FILENAME {
            return Err(ReportDirError::ExtraFile { name: filename });
        }
    }

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ReportDirError::ParseError {
            detail: format!("{e}"),
        })?;
    if canonical_json_bytes(&value)? != bytes {
        return Err(ReportDirError::NonCanonical);
    }

    let schema_version = value["schema_version"]
        .as_str()
        .ok_or_else(|| ReportDirError::ParseError {
            detail: "missing \"schema_version\"".into(),
        })?
        .to_string();
    let domain = report_domain(&schema_version).ok_or_else(|| ReportDirError::UnknownSchema {
        found: schema_version.clone(),
    })?;

    let recomputed = canonical_hash(domain, &bytes);
    let stored = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    if recomputed.as_str() != stored {
        return Err(ReportDirError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }

    Ok(StoredReportV1 {
        schema_version,
        value,
        bytes,
        digest: recomputed,
    })
}

/// Write bytes to a path via temp file + rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirError> {
    let dir = path.parent().ok_or_else(|| ReportDirError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirError::Io {
        detail: format!("rename {} -> {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, skipping leftover temp files from `write_atomic`.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirError> {
    let io = |e: std::io::Error| ReportDirError::Io {
        detail: format!("read_dir: {e}"),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if !entry.file_type().map_err(io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with(".tmp_") {
                files.insert(name.to_string());
            }
        }
    }
    Ok(files)
}
