//! Ignore-file matching and context tree walking
//!
//! This module compiles dockerignore-style rule files into an ordered rule
//! set, evaluates paths against it with last-match-wins semantics, and walks
//! a directory tree to produce the deterministic list of context files.

pub mod glob;
pub mod observe;
pub mod rule;
pub mod walker;

// Re-export commonly used items
pub use observe::{IncludeReason, NullObserver, TraceObserver, WalkObserver};
pub use rule::{IgnoreRule, MatchState, RuleSet};
pub use walker::walk;
