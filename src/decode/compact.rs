//! Fold recognizable multi-row idioms back into single helper calls.
//!
//! One left-to-right pass per test case. At each position the idioms are tried
//! in priority order and the first match consumes its whole window.
use super::call::{Call, CommandCall, HighlightRepeat};
use super::RenderedTestCase;

const HIGHLIGHT_COMMAND: &str = "highlight";
const PAUSE_COMMAND: &str = "pause";

/// Action families that may end a highlight idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAction {
    AssertText,
    Click,
    Select,
    Type,
}

impl SpecialAction {
    const ALL: [SpecialAction; 4] = [
        SpecialAction::AssertText,
        SpecialAction::Click,
        SpecialAction::Select,
        SpecialAction::Type,
    ];

    fn name_prefix(self) -> &'static str {
        match self {
            SpecialAction::AssertText => "assertText",
            SpecialAction::Click => "click",
            SpecialAction::Select => "select",
            SpecialAction::Type => "type",
        }
    }

    /// Classify a recorder command name; variants such as `clickAndWait` count.
    pub fn classify(command_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| command_name.starts_with(action.name_prefix()))
    }
}

/// Replace every recognized idiom in the test case's call list.
pub fn compact(case: RenderedTestCase) -> RenderedTestCase {
    let RenderedTestCase { name, calls } = case;
    RenderedTestCase {
        name,
        calls: compact_calls(calls),
    }
}

pub(crate) fn compact_calls(calls: Vec<Call>) -> Vec<Call> {
    let mut out = Vec::with_capacity(calls.len());
    let mut idx = 0;
    while idx < calls.len() {
        let window = &calls[idx..];
        if let Some(text) = match_comment_block(window) {
            tracing::debug!(position = idx, "folded comment block");
            out.push(Call::CommentBlock {
                text: text.to_string(),
            });
            idx += 5;
            continue;
        }
        if let Some(action) = match_highlight(window, HighlightRepeat::Twice) {
            tracing::debug!(position = idx, action = %action.name, "folded highlight twice");
            out.push(Call::Highlighted {
                repeat: HighlightRepeat::Twice,
                action: action.clone(),
            });
            idx += 5;
            continue;
        }
        if let Some(action) = match_highlight(window, HighlightRepeat::Once) {
            tracing::debug!(position = idx, action = %action.name, "folded highlight");
            out.push(Call::Highlighted {
                repeat: HighlightRepeat::Once,
                action: action.clone(),
            });
            idx += 3;
            continue;
        }
        out.push(calls[idx].clone());
        idx += 1;
    }
    out
}

fn match_comment_block(window: &[Call]) -> Option<&str> {
    match window {
        [Call::CommentDashed, Call::CommentDashed, Call::Comment { text }, Call::CommentDashed, Call::CommentDashed, ..] => {
            Some(text.as_str())
        }
        _ => None,
    }
}

/// Match `[highlight, pause]` repeated `repeat` times followed by a special action.
///
/// Element identity is not compared: the idiom is about shape.
fn match_highlight(window: &[Call], repeat: HighlightRepeat) -> Option<&CommandCall> {
    let pairs = match repeat {
        HighlightRepeat::Once => 1,
        HighlightRepeat::Twice => 2,
    };
    let width = pairs * 2 + 1;
    if window.len() < width {
        return None;
    }
    for pair in window[..pairs * 2].chunks(2) {
        if !pair[0].is_command_named(HIGHLIGHT_COMMAND) || !pair[1].is_command_named(PAUSE_COMMAND)
        {
            return None;
        }
    }
    let action = window[width - 1].as_command()?;
    SpecialAction::classify(&action.name)?;
    Some(action)
}

#[cfg(test)]
#[path = "compact_tests.rs"]
mod tests;
