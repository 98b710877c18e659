use super::{compact, compact_calls, SpecialAction};
use crate::decode::call::{Call, CommandCall, HighlightRepeat, PauseAlias};
use crate::decode::RenderedTestCase;

fn cmd(name: &str, arg1: &str, arg2: &str) -> Call {
    Call::Command(CommandCall::new(name, arg1, arg2))
}

fn comment(text: &str) -> Call {
    Call::Comment {
        text: text.to_string(),
    }
}

fn rendered(calls: &[Call]) -> Vec<String> {
    calls.iter().map(ToString::to_string).collect()
}

#[test]
fn folds_block_comment() {
    let calls = vec![
        Call::CommentDashed,
        Call::CommentDashed,
        comment("hello"),
        Call::CommentDashed,
        Call::CommentDashed,
    ];
    let out = compact_calls(calls);
    assert_eq!(
        out,
        vec![Call::CommentBlock {
            text: "hello".to_string()
        }]
    );
    assert_eq!(out[0].to_string(), r#"commentBlock("hello")"#);
}

#[test]
fn folds_highlight_once() {
    let calls = vec![
        cmd("highlight", "#btn", ""),
        cmd("pause", "200", ""),
        cmd("click", "#btn", ""),
    ];
    let out = compact_calls(calls);
    assert_eq!(rendered(&out), vec![r##"highlightAndClick("#btn")"##]);
}

#[test]
fn folds_highlight_twice_on_different_elements() {
    let calls = vec![
        cmd("highlight", "#btn", ""),
        cmd("pause", "200", ""),
        cmd("highlight", "#btn", ""),
        cmd("pause", "200", ""),
        cmd("type", "#f", "hi"),
    ];
    let out = compact_calls(calls);
    assert_eq!(
        out,
        vec![Call::Highlighted {
            repeat: HighlightRepeat::Twice,
            action: CommandCall::new("type", "#f", "hi"),
        }]
    );
    assert_eq!(rendered(&out), vec![r##"highlightTwiceAndType("#f", "hi")"##]);
}

#[test]
fn twice_takes_priority_over_once() {
    let calls = vec![
        cmd("highlight", "#a", ""),
        cmd("pause", "200", ""),
        cmd("highlight", "#a", ""),
        cmd("pause", "200", ""),
        cmd("select", "#menu", "label=Two"),
        cmd("open", "/next", ""),
    ];
    let out = compact_calls(calls);
    assert_eq!(
        rendered(&out),
        vec![
            r##"highlightTwiceAndSelect("#menu", "label=Two")"##,
            r#"command_open("/next")"#,
        ]
    );
}

#[test]
fn non_special_action_is_left_alone() {
    let calls = vec![
        cmd("highlight", "#a", ""),
        cmd("pause", "200", ""),
        cmd("open", "/x", ""),
    ];
    assert_eq!(compact_calls(calls.clone()), calls);
}

#[test]
fn aliased_pause_breaks_highlight_idiom() {
    let calls = vec![
        cmd("highlight", "#a", ""),
        Call::Pause {
            alias: PauseAlias::VeryShort,
        },
        cmd("click", "#a", ""),
    ];
    assert_eq!(compact_calls(calls.clone()), calls);
}

#[test]
fn truncated_windows_pass_through() {
    let calls = vec![
        cmd("open", "/", ""),
        Call::CommentDashed,
        Call::CommentDashed,
        comment("tail"),
        Call::CommentDashed,
    ];
    assert_eq!(compact_calls(calls.clone()), calls);

    let calls = vec![cmd("highlight", "#a", ""), cmd("pause", "200", "")];
    assert_eq!(compact_calls(calls.clone()), calls);
}

#[test]
fn short_windows_and_late_starts() {
    let calls = vec![
        cmd("highlight", "#a", ""),
        cmd("pause", "200", ""),
        cmd("highlight", "#b", ""),
        cmd("pause", "200", ""),
    ];
    assert_eq!(compact_calls(calls.clone()), calls);

    let calls = vec![
        cmd("highlight", "#a", ""),
        cmd("highlight", "#b", ""),
        cmd("pause", "200", ""),
        cmd("assertText", "#b", "ok"),
    ];
    assert_eq!(
        rendered(&compact_calls(calls)),
        vec![
            r##"command_highlight("#a")"##,
            r##"highlightAndAssertText("#b", "ok")"##,
        ]
    );
}

#[test]
fn leading_dashes_before_block_are_kept() {
    let calls = vec![
        Call::CommentDashed,
        Call::CommentDashed,
        Call::CommentDashed,
        comment("x"),
        Call::CommentDashed,
        Call::CommentDashed,
    ];
    assert_eq!(
        rendered(&compact_calls(calls)),
        vec!["commentDashed()", r#"commentBlock("x")"#]
    );
}

#[test]
fn compaction_is_idempotent() {
    let calls = vec![
        Call::CommentDashed,
        Call::CommentDashed,
        Call::CommentDashed,
        Call::CommentDashed,
        comment("intro"),
        Call::CommentDashed,
        Call::CommentDashed,
        cmd("highlight", "#a", ""),
        cmd("pause", "200", ""),
        cmd("highlight", "#a", ""),
        cmd("pause", "200", ""),
        cmd("highlight", "#a", ""),
        cmd("pause", "200", ""),
        cmd("click", "#a", ""),
        cmd("highlight", "#b", ""),
        cmd("pause", "200", ""),
    ];
    let once = compact(RenderedTestCase {
        name: "GEN_T".to_string(),
        calls,
    });
    let twice = compact(once.clone());
    assert_eq!(once, twice);
    assert_eq!(once.name, "GEN_T");
}

#[test]
fn special_actions_match_name_families() {
    assert_eq!(
        SpecialAction::classify("assertTextPresent"),
        Some(SpecialAction::AssertText)
    );
    assert_eq!(
        SpecialAction::classify("clickAndWait"),
        Some(SpecialAction::Click)
    );
    assert_eq!(SpecialAction::classify("type"), Some(SpecialAction::Type));
    assert_eq!(SpecialAction::classify("verifyText"), None);
    assert_eq!(SpecialAction::classify("open"), None);
}
