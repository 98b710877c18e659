//! Append-style authoring API that assembles a step sequence.
//!
//! The comment, pause, and highlight helpers emit exactly the multi-row shapes
//! the decoder folds back, so a default-configured script decodes to the helper
//! names that wrote it.
use crate::config::GeneratorConfig;
use crate::decode::PauseAlias;
use crate::encode;
use crate::model::{
    Sequence, Step, CLOSE_SUITE, CLOSE_TEST, COMMENT_COMMAND, COMMENT_DASHED_LINE,
    COMMENT_POSTFIX, COMMENT_PREFIX, OPEN_SUITE, OPEN_TEST,
};

#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    config: GeneratorConfig,
    sequence: Sequence,
}

impl ScriptBuilder {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            sequence: Sequence::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn finish(self) -> Sequence {
        self.sequence
    }

    pub fn render(&self) -> Vec<String> {
        encode::render(&self.sequence)
    }

    fn push(&mut self, name: &str, arg1: Option<&str>, arg2: Option<&str>) -> &mut Self {
        self.sequence.push(Step::new(name, arg1, arg2));
        self
    }

    // Suite and test boundaries.

    pub fn open_suite(&mut self, name: &str) -> &mut Self {
        self.push(OPEN_SUITE, Some(name), None)
    }

    pub fn close_suite(&mut self) -> &mut Self {
        self.push(CLOSE_SUITE, None, None)
    }

    pub fn open_test(&mut self, name: &str) -> &mut Self {
        self.push(OPEN_TEST, Some(name), None)
    }

    pub fn close_test(&mut self) -> &mut Self {
        self.push(CLOSE_TEST, None, None)
    }

    /// Append any recorder command; names are not checked.
    pub fn command(&mut self, name: &str, arg1: Option<&str>, arg2: Option<&str>) -> &mut Self {
        self.push(name, arg1, arg2)
    }

    // Common recorder commands.

    pub fn open(&mut self, url: &str) -> &mut Self {
        self.push("open", Some(url), None)
    }

    pub fn click(&mut self, element: &str) -> &mut Self {
        self.push("click", Some(element), None)
    }

    pub fn type_text(&mut self, element: &str, text: &str) -> &mut Self {
        self.push("type", Some(element), Some(text))
    }

    pub fn select(&mut self, element: &str, option: &str) -> &mut Self {
        self.push("select", Some(element), Some(option))
    }

    pub fn assert_text(&mut self, element: &str, text: &str) -> &mut Self {
        self.push("assertText", Some(element), Some(text))
    }

    pub fn assert_text_present(&mut self, text: &str) -> &mut Self {
        self.push("assertTextPresent", Some(text), None)
    }

    pub fn wait_for_text_present(&mut self, text: &str) -> &mut Self {
        self.push("waitForTextPresent", Some(text), None)
    }

    pub fn highlight(&mut self, element: &str) -> &mut Self {
        self.push("highlight", Some(element), None)
    }

    pub fn echo(&mut self, text: &str) -> &mut Self {
        self.push(COMMENT_COMMAND, Some(text), None)
    }

    pub fn pause(&mut self, msec: u32) -> &mut Self {
        let msec = msec.to_string();
        self.push("pause", Some(&msec), None)
    }

    // Comments.

    pub fn comment(&mut self, text: &str) -> &mut Self {
        let decorated = format!("{COMMENT_PREFIX}{text}{COMMENT_POSTFIX}");
        self.echo(&decorated)
    }

    pub fn comment_dashed(&mut self) -> &mut Self {
        self.echo(COMMENT_DASHED_LINE)
    }

    pub fn comment_block(&mut self, text: &str) -> &mut Self {
        self.comment_dashed()
            .comment_dashed()
            .comment(text)
            .comment_dashed()
            .comment_dashed()
    }

    // Named pauses scale the configured sleep base; halves round to even.

    fn named_pause(&mut self, alias: PauseAlias) -> &mut Self {
        let scaled = f64::from(self.config.sleep_base_msec) * alias.base_factor();
        let msec = scaled.round_ties_even() as u32;
        self.pause(msec)
    }

    pub fn long_pause(&mut self) -> &mut Self {
        self.named_pause(PauseAlias::Long)
    }

    pub fn short_pause(&mut self) -> &mut Self {
        self.named_pause(PauseAlias::Short)
    }

    pub fn very_short_pause(&mut self) -> &mut Self {
        self.named_pause(PauseAlias::VeryShort)
    }

    pub fn tiny_pause(&mut self) -> &mut Self {
        self.named_pause(PauseAlias::Tiny)
    }

    // Highlight-then-act helpers.

    fn highlight_and_pause(&mut self, element: &str) -> &mut Self {
        let msec = self.config.highlight_pause_msec;
        self.highlight(element).pause(msec)
    }

    pub fn highlight_and_assert_text(&mut self, element: &str, text: &str) -> &mut Self {
        self.highlight_and_pause(element).assert_text(element, text)
    }

    pub fn highlight_and_click(&mut self, element: &str) -> &mut Self {
        self.highlight_and_pause(element).click(element)
    }

    pub fn highlight_and_select(&mut self, element: &str, option: &str) -> &mut Self {
        self.highlight_and_pause(element).select(element, option)
    }

    pub fn highlight_and_type(&mut self, element: &str, text: &str) -> &mut Self {
        self.highlight_and_pause(element).type_text(element, text)
    }

    pub fn highlight_twice_and_assert_text(&mut self, element: &str, text: &str) -> &mut Self {
        self.highlight_and_pause(element)
            .highlight_and_assert_text(element, text)
    }

    pub fn highlight_twice_and_click(&mut self, element: &str) -> &mut Self {
        self.highlight_and_pause(element).highlight_and_click(element)
    }

    pub fn highlight_twice_and_select(&mut self, element: &str, option: &str) -> &mut Self {
        self.highlight_and_pause(element)
            .highlight_and_select(element, option)
    }

    pub fn highlight_twice_and_type(&mut self, element: &str, text: &str) -> &mut Self {
        self.highlight_and_pause(element)
            .highlight_and_type(element, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    fn listing(builder: &ScriptBuilder) -> Vec<String> {
        decode(builder.render())
            .expect("decode")
            .into_iter()
            .flat_map(|case| case.calls)
            .map(|call| call.to_string())
            .collect()
    }

    #[test]
    fn helpers_decode_back_to_their_names() {
        let mut builder = ScriptBuilder::new(GeneratorConfig::default());
        builder
            .open_suite("Suite")
            .open_test("Checkout")
            .comment_block("Checkout flow")
            .open("https://shop.example.com")
            .short_pause()
            .highlight_and_type("#qty", "2")
            .highlight_twice_and_click("#buy")
            .highlight_and_select("#ship", "label=Express")
            .highlight_twice_and_assert_text("#total", "$20")
            .comment("done")
            .comment_dashed()
            .long_pause()
            .very_short_pause()
            .tiny_pause()
            .close_test()
            .close_suite();
        assert_eq!(
            listing(&builder),
            vec![
                r#"commentBlock("Checkout flow")"#,
                r#"command_open("https://shop.example.com")"#,
                "shortPause()",
                r##"highlightAndType("#qty", "2")"##,
                r##"highlightTwiceAndClick("#buy")"##,
                r##"highlightAndSelect("#ship", "label=Express")"##,
                r##"highlightTwiceAndAssertText("#total", "$20")"##,
                r#"comment("done")"#,
                "commentDashed()",
                "longPause()",
                "veryShortPause()",
                "tinyPause()",
            ]
        );
    }

    #[test]
    fn pauses_scale_with_sleep_base() {
        let config = GeneratorConfig {
            sleep_base_msec: 500,
            ..GeneratorConfig::default()
        };
        let mut builder = ScriptBuilder::new(config);
        builder.long_pause().very_short_pause().tiny_pause();
        let args: Vec<Option<&str>> = builder
            .sequence
            .steps()
            .iter()
            .map(|step| step.arg1())
            .collect();
        assert_eq!(args, vec![Some("2500"), Some("125"), Some("5")]);
    }

    #[test]
    fn highlight_pause_is_configurable() {
        let config = GeneratorConfig {
            highlight_pause_msec: 750,
            ..GeneratorConfig::default()
        };
        let mut builder = ScriptBuilder::new(config);
        builder.highlight_and_click("#a");
        let sequence = builder.finish();
        assert_eq!(sequence.steps()[1], Step::new("pause", Some("750"), None));
    }

    #[test]
    fn scaled_pauses_round_half_to_even() {
        let config = GeneratorConfig {
            sleep_base_msec: 50,
            ..GeneratorConfig::default()
        };
        let mut builder = ScriptBuilder::new(config);
        builder.very_short_pause();
        assert_eq!(builder.config().sleep_base_msec, 50);
        assert_eq!(builder.finish().steps()[0].arg1(), Some("12"));
    }

    #[test]
    fn generic_commands_and_twice_type_decode() {
        let mut builder = ScriptBuilder::new(GeneratorConfig::default());
        builder
            .open_suite("Suite")
            .open_test("Drag")
            .command("dragAndDropToObject", Some("#card"), Some("#lane"))
            .command("refresh", None, None)
            .highlight_twice_and_type("#note", "moved")
            .close_test()
            .close_suite();
        assert_eq!(
            listing(&builder),
            vec![
                r##"command_dragAndDropToObject("#card", "#lane")"##,
                r#"command_refresh("")"#,
                r##"highlightTwiceAndType("#note", "moved")"##,
            ]
        );
    }
}
