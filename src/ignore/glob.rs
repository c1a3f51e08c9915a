//! Segment-aware glob compilation and matching
//!
//! Implements the dockerignore/gitignore pattern subset directly: `*` stays
//! within one path segment, `**` spans any number of segments, `?` matches a
//! single non-separator character, and `[...]` / `[!...]` are character
//! classes. Patterns are compiled once into token segments and matched
//! against slash-normalized relative paths.

use std::fmt;

/// Errors produced while compiling a single glob pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobError {
    /// A `[` class was opened but never closed
    UnterminatedClass,
    /// The pattern ends in a lone backslash
    DanglingEscape,
}

impl fmt::Display for GlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlobError::UnterminatedClass => write!(f, "unterminated character class"),
            GlobError::DanglingEscape => write!(f, "dangling escape"),
        }
    }
}

impl std::error::Error for GlobError {}

/// One entry of a character class
#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
}

/// One matchable unit within a path segment
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// A literal character
    Literal(char),
    /// `?` - exactly one character, never a separator
    AnyChar,
    /// `*` - any run of characters within the segment
    AnyRun,
    /// `[...]` or `[!...]`
    Class { negated: bool, items: Vec<ClassItem> },
}

/// One slash-delimited piece of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `**` - any number of whole segments, including zero
    AnySegments,
    /// An ordinary segment matched token by token
    Tokens(Vec<Token>),
}

/// A compiled glob pattern
#[derive(Debug, Clone)]
pub struct Glob {
    segments: Vec<Segment>,
}

impl Glob {
    /// Compile a pattern into matchable segments.
    ///
    /// `anchored` patterns match from the root of the tree; unanchored
    /// patterns get an implicit leading `**` so they match at any depth.
    pub fn compile(pattern: &str, anchored: bool) -> Result<Self, GlobError> {
        let mut segments = Vec::new();
        if !anchored {
            segments.push(Segment::AnySegments);
        }

        for raw in pattern.split('/') {
            if raw == "**" {
                // Collapse runs of ** - one already spans any depth
                if segments.last() != Some(&Segment::AnySegments) {
                    segments.push(Segment::AnySegments);
                }
            } else {
                segments.push(Segment::Tokens(tokenize(raw)?));
            }
        }

        Ok(Self { segments })
    }

    /// Match a slash-normalized relative path in full.
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').collect();
        match_segments(&self.segments, &parts)
    }
}

/// Tokenize one raw path segment
fn tokenize(raw: &str) -> Result<Vec<Token>, GlobError> {
    let mut tokens = Vec::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                // Adjacent stars within a segment collapse to one run
                if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
            },
            '?' => tokens.push(Token::AnyChar),
            '[' => tokens.push(parse_class(&mut chars)?),
            '\\' => {
                let escaped = chars.next().ok_or(GlobError::DanglingEscape)?;
                tokens.push(Token::Literal(escaped));
            },
            other => tokens.push(Token::Literal(other)),
        }
    }

    Ok(tokens)
}

/// Parse a character class body, consuming up to and including the closing `]`
fn parse_class(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<Token, GlobError> {
    let negated = matches!(chars.peek(), Some(&'!') | Some(&'^'));
    if negated {
        chars.next();
    }

    let mut items = Vec::new();
    let mut first = true;

    loop {
        let c = match chars.next() {
            Some(c) => c,
            None => return Err(GlobError::UnterminatedClass),
        };

        match c {
            // `]` closes the class unless it is the very first member
            ']' if !first => return Ok(Token::Class { negated, items }),
            '\\' => {
                let escaped = chars.next().ok_or(GlobError::UnterminatedClass)?;
                push_class_member(&mut items, escaped, chars);
            },
            member => push_class_member(&mut items, member, chars),
        }
        first = false;
    }
}

/// Add one member, folding `a-z` ranges when a dash follows
fn push_class_member(
    items: &mut Vec<ClassItem>,
    member: char,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) {
    if chars.peek() == Some(&'-') {
        let mut lookahead = chars.clone();
        lookahead.next(); // the dash
        match lookahead.peek() {
            Some(&end) if end != ']' => {
                chars.next();
                chars.next();
                items.push(ClassItem::Range(member, end));
                return;
            },
            _ => {}, // trailing dash is a literal member
        }
    }
    items.push(ClassItem::Char(member));
}

fn class_contains(items: &[ClassItem], c: char) -> bool {
    items.iter().any(|item| match item {
        ClassItem::Char(m) => *m == c,
        ClassItem::Range(lo, hi) => *lo <= c && c <= *hi,
    })
}

/// Match a segment list against path parts, whole-path
fn match_segments(segments: &[Segment], parts: &[&str]) -> bool {
    match segments.split_first() {
        None => parts.is_empty(),
        Some((Segment::AnySegments, rest)) => {
            (0..=parts.len()).any(|skip| match_segments(rest, &parts[skip..]))
        },
        Some((Segment::Tokens(tokens), rest)) => match parts.split_first() {
            Some((part, tail)) => {
                let chars: Vec<char> = part.chars().collect();
                match_tokens(tokens, &chars) && match_segments(rest, tail)
            },
            None => false,
        },
    }
}

/// Match tokens against the characters of one segment
fn match_tokens(tokens: &[Token], chars: &[char]) -> bool {
    match tokens.split_first() {
        None => chars.is_empty(),
        Some((Token::AnyRun, rest)) => {
            (0..=chars.len()).any(|skip| match_tokens(rest, &chars[skip..]))
        },
        Some((Token::AnyChar, rest)) => !chars.is_empty() && match_tokens(rest, &chars[1..]),
        Some((Token::Literal(expected), rest)) => {
            chars.first() == Some(expected) && match_tokens(rest, &chars[1..])
        },
        Some((Token::Class { negated, items }, rest)) => match chars.first() {
            Some(&c) => (class_contains(items, c) != *negated) && match_tokens(rest, &chars[1..]),
            None => false,
        },
    }
}
