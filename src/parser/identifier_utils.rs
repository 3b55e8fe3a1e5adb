//! Bracketed identifier helpers for line-oriented table script scanning.
//!
//! These work on raw text rather than tokens: a column declaration is
//! recognised by its leading `[name]`, and everything else is located by
//! character search relative to the brackets.
//!
//! # Examples
//!
//! ```ignore
//! use crate::parser::identifier_utils::*;
//!
//! assert_eq!(first_bracketed("[Name] [varchar](50) NULL,"), Some("[Name]"));
//! assert_eq!(last_bracketed("CREATE TABLE [dbo].[Customer]("), Some("[Customer]"));
//! assert_eq!(variable_name("[customer-id]", "@i"), "@icustomerid");
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BRACKETED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

/// The first `[...]` token on the line, brackets included.
pub fn first_bracketed(line: &str) -> Option<&str> {
    let start = line.find('[')?;
    let end = start + line[start..].find(']')?;
    Some(&line[start..=end])
}

/// The rightmost `[...]` token on the line, brackets included.
pub fn last_bracketed(line: &str) -> Option<&str> {
    let start = line.rfind('[')?;
    let end = line.rfind(']')?;
    (end > start).then(|| &line[start..=end])
}

/// Every `[...]` token on the line, in order.
pub fn bracketed_names(text: &str) -> impl Iterator<Item = &str> {
    BRACKETED_RE.find_iter(text).map(|m| m.as_str())
}

/// The line with every `[...]` token removed, so keyword checks never match inside a name.
pub fn without_bracketed(text: &str) -> Cow<'_, str> {
    BRACKETED_RE.replace_all(text, "")
}

/// Strips the surrounding brackets from a bracketed identifier.
pub fn unbracket(ident: &str) -> &str {
    ident.trim().trim_start_matches('[').trim_end_matches(']')
}

/// Derives a procedure parameter name from a bracketed column name.
///
/// Brackets, whitespace and hyphens are dropped and `prefix` is prepended.
///
/// ```ignore
/// assert_eq!(variable_name("[First Name]", "@i"), "@iFirstName");
/// ```
pub fn variable_name(raw_name: &str, prefix: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + raw_name.len());
    name.push_str(prefix);
    name.extend(
        raw_name
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '-') && !c.is_whitespace()),
    );
    name
}

/// Reads the data type that follows a column name ending at byte offset `name_end`.
///
/// The type runs to the next whitespace outside parentheses, so
/// `[decimal](18, 2)` yields `decimal(18, 2)`. Closing brackets and a
/// trailing comma are stripped.
pub fn declared_type(line: &str, name_end: usize) -> String {
    let rest = line
        .get(name_end + 1..)
        .unwrap_or("")
        .trim_start()
        .trim_start_matches('[');

    let mut depth = 0usize;
    let mut end = rest.len();
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                end = i;
                break;
            }
            _ => {}
        }
    }

    rest[..end]
        .trim_end_matches(',')
        .chars()
        .filter(|&c| c != ']')
        .collect()
}

/// Extracts the naming token embedded in a table name: the text after
/// `marker` up to `terminator`, or up to the next `]` when the terminator
/// is absent. Whitespace is removed.
///
/// Returns `None` when the line has no `marker`.
pub fn naming_token(line: &str, marker: char, terminator: &str) -> Option<String> {
    let start = line.find(marker)? + marker.len_utf8();
    let rest = &line[start..];
    let end = rest
        .find(terminator)
        .or_else(|| rest.find(']'))
        .unwrap_or(rest.len());
    Some(rest[..end].chars().filter(|c| !c.is_whitespace()).collect())
}
