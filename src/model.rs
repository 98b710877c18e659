//! In-memory test steps and the ordered sequence that makes up a suite.
//!
//! Step names are an open vocabulary: any string is a legal recorder command.
//! Four reserved names mark suite and test boundaries instead of actions.
use serde::{Deserialize, Serialize};

/// Reserved step name opening the suite document; `arg1` carries the title.
pub const OPEN_SUITE: &str = "openTestSuite";
/// Reserved step name closing the suite document.
pub const CLOSE_SUITE: &str = "closeTestSuite";
/// Reserved step name opening a test table; `arg1` carries the test name.
pub const OPEN_TEST: &str = "openTest";
/// Reserved step name closing a test table.
pub const CLOSE_TEST: &str = "closeTest";

/// Recorder command used to carry free-text comment rows.
pub const COMMENT_COMMAND: &str = "echo";
/// 45-character divider emitted by `commentDashed`.
pub const COMMENT_DASHED_LINE: &str = "---------------------------------------------";
pub const COMMENT_PREFIX: &str = "-- ";
pub const COMMENT_POSTFIX: &str = " --";

/// One test action or structural sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arg1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arg2: Option<String>,
}

impl Step {
    pub fn new(name: impl Into<String>, arg1: Option<&str>, arg2: Option<&str>) -> Self {
        Self {
            name: name.into(),
            arg1: arg1.map(str::to_string),
            arg2: arg2.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg1(&self) -> Option<&str> {
        self.arg1.as_deref()
    }

    pub fn arg2(&self) -> Option<&str> {
        self.arg2.as_deref()
    }

    pub fn kind(&self) -> StepKind<'_> {
        match self.name.as_str() {
            OPEN_SUITE => StepKind::OpenSuite(self.arg1().unwrap_or("")),
            CLOSE_SUITE => StepKind::CloseSuite,
            OPEN_TEST => StepKind::OpenTest(self.arg1().unwrap_or("")),
            CLOSE_TEST => StepKind::CloseTest,
            _ => StepKind::Action(self),
        }
    }
}

/// Sentinel-aware view of a step used by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind<'a> {
    OpenSuite(&'a str),
    CloseSuite,
    OpenTest(&'a str),
    CloseTest,
    Action(&'a Step),
}

/// Ordered steps of a full suite, in execution order.
///
/// A well-formed sequence opens with one suite sentinel, closes with its match,
/// and holds non-nested test pairs in between. This is assumed, not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    steps: Vec<Step>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Step> for Sequence {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
