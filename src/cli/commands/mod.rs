//! CLI command implementations

pub mod files;
pub mod hash;

use crate::fingerprint::Fingerprinter;
use std::path::Path;

/// Build a fingerprinter from the shared command-line options
pub fn build_fingerprinter(
    path: &Path,
    ignore_file: &str,
    always_include: &[String],
) -> Fingerprinter {
    Fingerprinter::new(path)
        .ignore_file(ignore_file)
        .always_include(always_include.iter().cloned())
}
