//! Human and machine listings of decoded test cases.
use crate::decode::{Call, RenderedTestCase};
use anyhow::{Context, Result};
use serde::Serialize;

const CASE_RULE: &str = "-----------------------------";

/// Text listing: a rule, the case name, then each call as a source statement.
pub fn format_text(cases: &[RenderedTestCase]) -> String {
    let mut out = String::new();
    for case in cases {
        out.push('\n');
        out.push_str(CASE_RULE);
        out.push('\n');
        out.push_str(&case.name);
        out.push_str("\n\n");
        for call in &case.calls {
            out.push_str(&format!("    {call};\n"));
        }
    }
    out
}

#[derive(Serialize)]
struct JsonCase<'a> {
    name: &'a str,
    calls: Vec<JsonCall<'a>>,
}

#[derive(Serialize)]
struct JsonCall<'a> {
    source: String,
    #[serde(flatten)]
    call: &'a Call,
}

/// JSON listing with both the typed call and its source form.
pub fn format_json(cases: &[RenderedTestCase]) -> Result<String> {
    let listing: Vec<JsonCase<'_>> = cases
        .iter()
        .map(|case| JsonCase {
            name: &case.name,
            calls: case
                .calls
                .iter()
                .map(|call| JsonCall {
                    source: call.to_string(),
                    call,
                })
                .collect(),
        })
        .collect();
    serde_json::to_string_pretty(&listing).context("serialize decoded listing")
}
