//! Ignore-file rule compilation with gitignore-style semantics
//!
//! Ignore files are line-oriented: comments (`#`), blank lines, negation
//! (`!`), escapes (`\#`, `\!`), root anchors (leading `/`) and directory
//! anchors (trailing `/`). Rules are kept in file order; the last rule that
//! matches a path wins.

use crate::core::error::{CtxsumError, Result};
use crate::ignore::glob::Glob;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A single compiled rule from an ignore file
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    /// The original line text
    pub original: String,
    /// Whether this rule re-includes matched paths
    pub negated: bool,
    /// Whether this rule only matches directories (trailing `/`)
    pub dir_only: bool,
    /// Whether this rule is anchored to the tree root (leading `/`)
    pub anchored: bool,
    /// The compiled glob
    glob: Glob,
}

impl IgnoreRule {
    /// Check whether this rule matches a slash-normalized relative path
    pub fn matches(&self, rel_path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        self.glob.matches(rel_path)
    }
}

/// Cumulative inclusion/exclusion state for one directory.
///
/// The walker stores one of these per visited directory, keyed by relative
/// path, and hands it to that directory's children so ancestor effects are
/// not re-derived per entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    /// Whether the directory itself is excluded
    pub excluded: bool,
}

/// An ordered, immutable set of compiled ignore rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<IgnoreRule>,
    has_negation: bool,
}

impl RuleSet {
    /// The empty rule set: every path is included
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile rule-file contents into an ordered rule set
    pub fn parse(contents: &str) -> Result<Self> {
        let mut rules = Vec::new();

        for (line_num, line) in contents.lines().enumerate() {
            if let Some(rule) = parse_line(line, line_num + 1)? {
                rules.push(rule);
            }
        }

        let has_negation = rules.iter().any(|r| r.negated);
        Ok(Self {
            rules,
            has_negation,
        })
    }

    /// Load and compile an ignore file.
    ///
    /// A missing file is not an error: it yields the empty rule set.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::empty()),
            Err(e) => Err(CtxsumError::ignore_read(path.to_path_buf(), e)),
        }
    }

    /// Whether any rule in the set is a negation.
    ///
    /// When false, an excluded directory can never contain an included
    /// descendant, so the walker may prune its whole subtree.
    pub fn has_negation(&self) -> bool {
        self.has_negation
    }

    /// Number of compiled rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate a path against the rule set, last match wins.
    ///
    /// Paths no rule matches inherit `parent`'s state, so files under an
    /// excluded directory stay excluded unless a later negation re-includes
    /// them. Returns the decision together with the state a directory at
    /// this path would pass on to its children.
    pub fn matches(&self, rel_path: &str, is_dir: bool, parent: &MatchState) -> (bool, MatchState) {
        let mut excluded = parent.excluded;

        for rule in &self.rules {
            if rule.matches(rel_path, is_dir) {
                excluded = !rule.negated;
            }
        }

        (excluded, MatchState { excluded })
    }
}

/// Parse a single ignore-file line into a rule, if it holds one
fn parse_line(line: &str, line_num: usize) -> Result<Option<IgnoreRule>> {
    let line = line.trim();

    // Skip blank lines and comments; `\#` escapes a literal leading hash
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (negated, pattern_str) = match line.strip_prefix('!') {
        Some(rest) => (true, rest.trim()),
        None => (false, line),
    };
    if pattern_str.is_empty() {
        return Ok(None);
    }

    // Trailing `/` restricts the rule to directories
    let (dir_only, pattern_str) = match pattern_str.strip_suffix('/') {
        Some(rest) => (true, rest),
        None => (false, pattern_str),
    };

    // Leading `/` anchors the rule to the tree root
    let (anchored, pattern_str) = match pattern_str.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, pattern_str),
    };
    if pattern_str.is_empty() {
        return Ok(None);
    }

    let glob = Glob::compile(pattern_str, anchored)
        .map_err(|e| CtxsumError::pattern(line_num, line, e.to_string()))?;

    Ok(Some(IgnoreRule {
        original: line.to_string(),
        negated,
        dir_only,
        anchored,
        glob,
    }))
}
