//! Walk observation hooks
//!
//! Observers receive pass-through events while the walker runs. They must
//! never influence the outcome; the walker produces the same file list with
//! or without one attached.

/// Why a file ended up in the context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeReason {
    /// No exclusion rule applied, or a negation re-included the path
    Rules,
    /// The path is on the caller's always-include list
    AlwaysInclude,
}

/// Receiver for walk events
pub trait WalkObserver {
    /// A file was added to the context
    fn on_file_included(&mut self, _path: &str, _reason: IncludeReason) {}

    /// A directory is about to be descended into
    fn on_directory_entered(&mut self, _path: &str) {}

    /// A file was dropped, or a directory subtree was pruned
    fn on_skipped(&mut self, _path: &str, _is_dir: bool) {}
}

/// Observer that discards all events
pub struct NullObserver;

impl WalkObserver for NullObserver {}

/// Observer that emits events through `tracing`
pub struct TraceObserver;

impl WalkObserver for TraceObserver {
    fn on_file_included(&mut self, path: &str, reason: IncludeReason) {
        tracing::debug!(path, ?reason, "file included");
    }

    fn on_directory_entered(&mut self, path: &str) {
        tracing::trace!(path, "entering directory");
    }

    fn on_skipped(&mut self, path: &str, is_dir: bool) {
        tracing::debug!(path, is_dir, "skipped by ignore rules");
    }
}
