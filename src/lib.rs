//! ctxsum - deterministic build-context fingerprinting
//!
//! ctxsum computes a content-addressable fingerprint over exactly the files
//! that would be sent to a container build context, honoring a
//! dockerignore-style ignore file bit-for-bit (wildcards, negation,
//! directory anchors, escaping). Two trees with the same included paths and
//! contents always produce the same hash, so the result works as a build
//! cache key.
//!
//! # Core Features
//!
//! - **Ignore-file semantics**: comments, negation, escapes, root and
//!   directory anchors, `*` / `**` / `?` / `[...]` globs, last match wins
//! - **Deterministic output**: included paths are sorted before hashing, so
//!   filesystem iteration order never leaks into the digest
//! - **Always-include overrides**: named files bypass ignore matching
//! - **Pluggable observation**: walk events can be traced without ever
//!   affecting the result
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use ctxsum::Fingerprinter;
//!
//! let hash = Fingerprinter::new("./my-service")
//!     .always_include(["Dockerfile", ".dockerignore"])
//!     .hash()?;
//! println!("context fingerprint: {hash}");
//! # Ok::<(), ctxsum::CtxsumError>(())
//! ```

pub mod cli;
pub mod core;
pub mod fingerprint;
pub mod ignore;

// Re-export commonly used types
pub use self::core::{
    error::{CtxsumError, Result},
    hash::{Hash, FULL_HEX_LEN},
};

pub use fingerprint::{
    hash_files, ContentReader, Fingerprinter, OsReader, DEFAULT_IGNORE_FILE, DEFAULT_TRUNCATE_LEN,
};

pub use ignore::{IncludeReason, MatchState, NullObserver, RuleSet, TraceObserver, WalkObserver};

/// Current version of ctxsum
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
