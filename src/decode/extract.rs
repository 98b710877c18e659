use super::call::{Call, CommandCall, PauseAlias};
use super::RenderedTestCase;
use crate::model::{COMMENT_COMMAND, COMMENT_DASHED_LINE, COMMENT_POSTFIX, COMMENT_PREFIX};
use anyhow::{anyhow, Result};
use regex::Regex;

const HEADER_MARKER: &str = r#"<td rowspan="1""#;
const ROW_PREFIX: &str = "<tr><td>";
const PAUSE_COMMAND: &str = "pause";

/// Full-line patterns for the three row cells.
pub(super) struct RowPatterns {
    header: Regex,
    command: Regex,
    arg1: Regex,
    arg2: Regex,
}

impl RowPatterns {
    pub(super) fn new() -> Result<Self> {
        Ok(Self {
            header: compile(r#"<td rowspan="1"[^>]*colspan="3">([^<]*)<"#)?,
            command: compile(r"^<tr><td>(.*?)</td><td>.*$")?,
            arg1: compile(r"^.*</td><td>(.*?)<datalist>.*$")?,
            arg2: compile(r"^.*<td>(.*?)</td>$")?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| anyhow!("invalid regex: {pattern}: {err}"))
}

fn capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scan recorder markup and collect one call per row, grouped by test table.
///
/// Scaffold lines are skipped. A row that does not fit the fixed cell layout,
/// or that appears before any test header, fails the whole extraction.
pub fn extract_raw<I, S>(lines: I) -> Result<Vec<RenderedTestCase>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let patterns = RowPatterns::new()?;
    let mut cases: Vec<RenderedTestCase> = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim_end_matches('\r');
        let line_no = idx + 1;

        if line.contains(HEADER_MARKER) {
            let name = capture(&patterns.header, line)
                .ok_or_else(|| anyhow!("unparseable test header at line {line_no}: {line}"))?;
            tracing::debug!(line = line_no, name, "test case header");
            cases.push(RenderedTestCase::new(name));
        }

        if line.starts_with(ROW_PREFIX) {
            let call = parse_row(&patterns, line)
                .ok_or_else(|| anyhow!("unparseable row at line {line_no}: {line}"))?;
            let case = cases
                .last_mut()
                .ok_or_else(|| anyhow!("row outside test case at line {line_no}: {line}"))?;
            tracing::debug!(line = line_no, call = %call, "extracted row");
            case.calls.push(call);
        }
    }

    Ok(cases)
}

fn parse_row(patterns: &RowPatterns, line: &str) -> Option<Call> {
    let command = capture(&patterns.command, line)?;
    let arg1 = capture(&patterns.arg1, line)?;
    let arg2 = capture(&patterns.arg2, line)?;
    Some(reconstruct(CommandCall::new(command, arg1, arg2)))
}

/// Apply the comment and pause rewrites, falling back to the raw command.
pub(super) fn reconstruct(command: CommandCall) -> Call {
    if command.is_named(COMMENT_COMMAND) {
        if command.arg1 == COMMENT_DASHED_LINE {
            return Call::CommentDashed;
        }
        if let Some(text) = strip_comment(&command.arg1) {
            return Call::Comment {
                text: text.to_string(),
            };
        }
    }
    if command.is_named(PAUSE_COMMAND) && command.arg2.is_empty() {
        if let Some(alias) = PauseAlias::from_literal(&command.arg1) {
            return Call::Pause { alias };
        }
    }
    Call::Command(command)
}

fn strip_comment(text: &str) -> Option<&str> {
    if text.len() < COMMENT_PREFIX.len() + COMMENT_POSTFIX.len() {
        return None;
    }
    text.strip_prefix(COMMENT_PREFIX)?.strip_suffix(COMMENT_POSTFIX)
}
