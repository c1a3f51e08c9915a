//! Build-context fingerprinting
//!
//! Ties the pieces together: compile the ignore file, walk the tree, and
//! fold the sorted file list into one SHA-256 digest. The digest covers both
//! relative paths and file contents, so renames and edits both change it.

pub mod reader;

use crate::core::error::{CtxsumError, Result};
use crate::core::hash::StreamingHasher;
use crate::ignore::observe::{NullObserver, WalkObserver};
use crate::ignore::rule::RuleSet;
use crate::ignore::walker::walk;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};

pub use reader::{ContentReader, OsReader};

/// Ignore file consulted when the caller does not name one
pub const DEFAULT_IGNORE_FILE: &str = ".dockerignore";

/// Hex characters returned when the caller does not set a length
pub const DEFAULT_TRUNCATE_LEN: usize = 12;

/// Fingerprints one directory tree.
///
/// Each invocation owns its rule set, walk state and file list; instances
/// are cheap and hold no handles, so concurrent fingerprints of different
/// roots never share anything.
#[derive(Debug, Clone)]
pub struct Fingerprinter {
    root: PathBuf,
    ignore_file: String,
    always_include: BTreeSet<String>,
    truncate: usize,
}

impl Fingerprinter {
    /// Create a fingerprinter for the tree rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            always_include: BTreeSet::new(),
            truncate: DEFAULT_TRUNCATE_LEN,
        }
    }

    /// Use a different ignore-file name, resolved relative to the root
    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }

    /// Add relative file paths that bypass ignore matching
    pub fn always_include<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.always_include.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Set the number of hex characters to return; 0 means the full digest
    pub fn truncate_len(mut self, len: usize) -> Self {
        self.truncate = len;
        self
    }

    /// Compile the ignore file into a rule set.
    ///
    /// A missing ignore file yields the empty set.
    pub fn rules(&self) -> Result<RuleSet> {
        RuleSet::load(&self.root.join(&self.ignore_file))
    }

    /// The sorted list of relative paths the fingerprint would cover
    pub fn files(&self) -> Result<Vec<String>> {
        self.files_observed(&mut NullObserver)
    }

    /// Like [`files`](Self::files), reporting walk events to `observer`
    pub fn files_observed(&self, observer: &mut dyn WalkObserver) -> Result<Vec<String>> {
        let rules = self.rules()?;
        walk(&self.root, &rules, &self.always_include, observer)
    }

    /// Compute the context fingerprint
    pub fn hash(&self) -> Result<String> {
        self.hash_observed(&mut NullObserver)
    }

    /// Like [`hash`](Self::hash), reporting walk events to `observer`
    pub fn hash_observed(&self, observer: &mut dyn WalkObserver) -> Result<String> {
        let files = self.files_observed(observer)?;
        hash_files(&self.root, &files, &OsReader, self.truncate)
    }
}

/// Fold a sorted file list into one digest.
///
/// For every file the accumulator receives the relative path bytes, a single
/// NUL, then the content bytes. The NUL keeps path and content apart: `ab`
/// containing `c` must differ from `a` containing `bc`. An empty list
/// produces the digest of the empty byte sequence, not an error.
pub fn hash_files(
    root: &Path,
    sorted_files: &[String],
    reader: &dyn ContentReader,
    truncate: usize,
) -> Result<String> {
    let mut hasher = StreamingHasher::new();
    let mut buffer = [0u8; 8192];

    for rel in sorted_files {
        hasher.update(rel.as_bytes());
        hasher.update(&[0u8]);

        let path = root.join(rel);
        let mut content = reader
            .open(&path)
            .map_err(|e| CtxsumError::file_read(path.clone(), e))?;
        loop {
            let n = content
                .read(&mut buffer)
                .map_err(|e| CtxsumError::file_read(path.clone(), e))?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
    }

    Ok(hasher.finalize().to_hex_truncated(truncate))
}
