//! Read recorder suite markup back into authoring calls.
//!
//! Extraction is strict about line shape: one row per physical line with the
//! `</tr>` on its own line, exactly as the encoder writes it.
use crate::output::read_lines;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

mod call;
mod compact;
mod extract;

pub use call::{Call, CommandCall, HighlightRepeat, PauseAlias};
pub use compact::{compact, SpecialAction};
pub use extract::extract_raw;

/// One decoded test table: its header name and calls in row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTestCase {
    pub name: String,
    pub calls: Vec<Call>,
}

impl RenderedTestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Vec::new(),
        }
    }
}

/// Extract every test case and fold its idioms.
pub fn decode<I, S>(lines: I) -> Result<Vec<RenderedTestCase>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(extract_raw(lines)?.into_iter().map(compact).collect())
}

/// Read a suite file and decode it; with `raw` the idiom pass is skipped.
pub fn decode_file(path: &Path, raw: bool) -> Result<Vec<RenderedTestCase>> {
    let lines = read_lines(path)?;
    let cases = if raw {
        extract_raw(&lines)?
    } else {
        decode(&lines)?
    };
    tracing::info!(
        path = %path.display(),
        test_cases = cases.len(),
        "decoded suite file"
    );
    Ok(cases)
}
