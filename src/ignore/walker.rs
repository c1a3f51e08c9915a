//! Context tree traversal with ignore filtering
//!
//! Walks a directory tree, evaluates every entry against the compiled rule
//! set, and returns the slash-normalized relative paths of the files that
//! belong to the build context, sorted lexicographically. The underlying
//! filesystem's iteration order never leaks into the result.

use crate::core::error::{CtxsumError, Result};
use crate::ignore::observe::{IncludeReason, WalkObserver};
use crate::ignore::rule::{MatchState, RuleSet};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use walkdir::WalkDir;

/// Walk `root` and collect the included files.
///
/// Paths in `always_include` are kept unconditionally when they name a file;
/// they do not exempt directories from matching. An excluded directory is
/// pruned outright when the rule set holds no negation (nothing deeper could
/// be re-included); otherwise the walker descends so later negation rules
/// still get their say.
pub fn walk(
    root: &Path,
    rules: &RuleSet,
    always_include: &BTreeSet<String>,
    observer: &mut dyn WalkObserver,
) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(CtxsumError::root_not_found(root.to_path_buf()));
    }

    // Cumulative state per visited directory, keyed by relative path
    let mut states: HashMap<String, MatchState> = HashMap::new();
    let mut files = Vec::new();

    let mut it = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = it.next() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            CtxsumError::Walk { path, source: e }
        })?;

        let rel = match rel_slash(root, entry.path()) {
            Some(rel) => rel,
            None => continue,
        };
        let parent_state = parent_state(&states, &rel);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            let (excluded, state) = rules.matches(&rel, true, &parent_state);

            if excluded && !rules.has_negation() && !has_always_beneath(always_include, &rel) {
                observer.on_skipped(&rel, true);
                it.skip_current_dir();
                continue;
            }

            observer.on_directory_entered(&rel);
            states.insert(rel, state);
        } else if file_type.is_file() {
            if always_include.contains(&rel) {
                observer.on_file_included(&rel, IncludeReason::AlwaysInclude);
                files.push(rel);
                continue;
            }

            let (excluded, _) = rules.matches(&rel, false, &parent_state);
            if excluded {
                observer.on_skipped(&rel, false);
            } else {
                observer.on_file_included(&rel, IncludeReason::Rules);
                files.push(rel);
            }
        }
        // Symlinks and other special entries are left to the host filesystem
    }

    files.sort();
    Ok(files)
}

/// Root-relative path with `/` separators, independent of the host OS
fn rel_slash(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Look up the stored state of a path's parent directory
fn parent_state(states: &HashMap<String, MatchState>, rel: &str) -> MatchState {
    match rel.rsplit_once('/') {
        Some((parent, _)) => states.get(parent).copied().unwrap_or_default(),
        None => MatchState::default(),
    }
}

/// Whether any always-include path lives beneath the given directory
fn has_always_beneath(always_include: &BTreeSet<String>, dir_rel: &str) -> bool {
    always_include
        .iter()
        .any(|p| p.len() > dir_rel.len() && p.starts_with(dir_rel) && p.as_bytes()[dir_rel.len()] == b'/')
}
