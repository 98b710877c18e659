//! Render a step sequence into recorder suite markup.
//!
//! The recorder reads one row per physical line, so every fragment below is
//! reproduced byte-for-byte, including the duplicated `arg1` in the datalist.
use crate::model::{Sequence, Step, StepKind};

/// Header cell prefix marking a test table as generated.
pub const GENERATED_TEST_PREFIX: &str = "GEN_";

/// Render the whole sequence, one output line per entry (no terminators).
pub fn render(sequence: &Sequence) -> Vec<String> {
    let mut out = Vec::new();
    for step in sequence.steps() {
        match step.kind() {
            StepKind::OpenSuite(name) => append_open_suite(&mut out, name),
            StepKind::CloseSuite => append_close_suite(&mut out),
            StepKind::OpenTest(name) => append_open_test(&mut out, name),
            StepKind::CloseTest => append_close_test(&mut out),
            StepKind::Action(step) => append_row(&mut out, step),
        }
    }
    out
}

// The recorder's own files open with this 8-line preamble.
fn append_open_suite(out: &mut Vec<String>, suite_name: &str) {
    out.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    out.push(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#
            .to_string(),
    );
    out.push(r#"<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">"#.to_string());
    out.push("<head>".to_string());
    out.push(
        r#"    <meta http-equiv="content-type" content="text/html; charset=utf-8">"#.to_string(),
    );
    out.push(format!("    <title>{suite_name}</title>"));
    out.push("</head>".to_string());
    out.push("<body>".to_string());
}

fn append_close_suite(out: &mut Vec<String>) {
    out.push("</body>".to_string());
    out.push("</html>".to_string());
}

fn append_open_test(out: &mut Vec<String>, test_name: &str) {
    out.push(r#"<table cellpadding="1" cellspacing="1" border="1">"#.to_string());
    out.push("<thead>".to_string());
    out.push(format!(
        r#"<tr><td rowspan="1" colspan="3">{GENERATED_TEST_PREFIX}{test_name}</td></tr>"#
    ));
    out.push("</thead>".to_string());
    out.push("<tbody>".to_string());
}

fn append_close_test(out: &mut Vec<String>) {
    out.push("</tbody></table>".to_string());
}

fn append_row(out: &mut Vec<String>, step: &Step) {
    let command = step.name();
    let arg1 = step.arg1().unwrap_or("");
    let arg2 = step.arg2().unwrap_or("");
    out.push(format!(
        "<tr><td>{command}</td><td>{arg1}<datalist><option>{arg1}</option></datalist></td><td>{arg2}</td>"
    ));
    out.push("</tr>".to_string());
}
