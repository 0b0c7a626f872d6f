//! Task line parser.
//!
//! # Format
//!
//! ```text
//! [TODO|DONE] name: [(A|B|C)] description words [(A|B|C)] [due:YYYY-MM-DD] [deps:a,b]
//! ```
//!
//! Properties are the trailing `key:value` words of the line; scanning stops at the first
//! word (from the end) without a colon. Everything between the name (and optional
//! priority) and the properties is the description.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::agenda::Priority;
use crate::error::LineIssueKind;

pub const TODO_TAG: &str = "TODO";
pub const DONE_TAG: &str = "DONE";

const PROP_DUE: &str = "due";
const PROP_DEPS: &str = "deps";

/// A parsed task line, borrowing from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine<'a> {
    pub done: bool,
    pub name: &'a str,
    pub priority: Priority,
    pub description: &'a str,
    pub due: Option<NaiveDate>,
    pub dependencies: Vec<&'a str>,
    /// Recoverable problems; the offending property was ignored.
    pub issues: Vec<LineIssueKind>,
}

fn priority_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\(([ABC])\)$").expect("priority regex"))
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex"))
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !date_re().is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_priority(word: &str) -> Option<Priority> {
    priority_re()
        .captures(word)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .and_then(Priority::from_label)
}

/// Split off the first whitespace-delimited word: `(word, rest)`.
fn first_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}

/// Split off the last whitespace-delimited word: `(rest, word)`.
fn last_word(s: &str) -> (&str, &str) {
    let s = s.trim_end();
    match s.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, c)) => (&s[..idx], &s[idx + c.len_utf8()..]),
        None => ("", s),
    }
}

/// Parse one logical task line.
///
/// # Errors
///
/// Returns [`LineIssueKind::MalformedLine`] when no `name:` can be found. Bad dates and
/// unknown properties do not fail the line; they are reported in [`TaskLine::issues`].
pub fn parse_task_line(line: &str) -> Result<TaskLine<'_>, LineIssueKind> {
    let mut rest = line.trim();
    let mut done = false;

    let (word, after) = first_word(rest);
    if word == TODO_TAG {
        rest = after;
    } else if word == DONE_TAG {
        done = true;
        rest = after;
    }

    // name: first word, up to its first colon
    let (word, _) = first_word(rest);
    let colon = word.find(':').ok_or(LineIssueKind::MalformedLine)?;
    let name = &word[..colon];
    if name.is_empty() {
        return Err(LineIssueKind::MalformedLine);
    }
    let rest_start = rest.trim_start();
    rest = &rest_start[colon + 1..];

    let mut priority = None;
    let (word, after) = first_word(rest);
    if let Some(p) = parse_priority(word) {
        priority = Some(p);
        rest = after;
    }

    let mut properties = Vec::new();
    loop {
        let (before, word) = last_word(rest);
        match word.split_once(':') {
            Some(prop) if !word.is_empty() => {
                properties.push(prop);
                rest = before;
            }
            _ => break,
        }
    }
    properties.reverse();

    if priority.is_none() {
        let (before, word) = last_word(rest);
        if let Some(p) = parse_priority(word) {
            priority = Some(p);
            rest = before;
        }
    }

    let mut parsed = TaskLine {
        done,
        name,
        priority: priority.unwrap_or_default(),
        description: rest.trim(),
        due: None,
        dependencies: Vec::new(),
        issues: Vec::new(),
    };

    for (key, value) in properties {
        match key {
            PROP_DUE => match parse_date(value) {
                Some(date) => parsed.due = Some(date),
                None => parsed
                    .issues
                    .push(LineIssueKind::InvalidDate(value.to_string())),
            },
            PROP_DEPS => parsed
                .dependencies
                .extend(value.split(',').map(str::trim).filter(|d| !d.is_empty())),
            other => parsed
                .issues
                .push(LineIssueKind::UnknownProperty(other.to_string())),
        }
    }

    Ok(parsed)
}
