//! Typed calls reconstructed from recorder rows.
//!
//! Each call prints as the authoring-API invocation that would produce it, so a
//! decoded listing can be transcribed back into a test script.
use serde::Serialize;
use std::fmt;

/// A single recorder command with its cell arguments.
///
/// `arg2` is the literal third cell and is empty, never absent, when the cell
/// held no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCall {
    pub name: String,
    pub arg1: String,
    pub arg2: String,
}

impl CommandCall {
    pub fn new(name: impl Into<String>, arg1: impl Into<String>, arg2: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg1: arg1.into(),
            arg2: arg2.into(),
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    fn fmt_args(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\"", self.arg1)?;
        if !self.arg2.is_empty() {
            write!(f, ", \"{}\"", self.arg2)?;
        }
        f.write_str(")")
    }
}

/// Fixed-duration pause helpers recognized by exact millisecond value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseAlias {
    Long,
    Short,
    VeryShort,
    Tiny,
}

impl PauseAlias {
    pub const ALL: [PauseAlias; 4] = [
        PauseAlias::Long,
        PauseAlias::Short,
        PauseAlias::VeryShort,
        PauseAlias::Tiny,
    ];

    /// Literal duration the decoder matches against.
    pub fn literal_msec(self) -> &'static str {
        match self {
            PauseAlias::Long => "5000",
            PauseAlias::Short => "1000",
            PauseAlias::VeryShort => "250",
            PauseAlias::Tiny => "10",
        }
    }

    /// Multiplier applied to the sleep base when authoring.
    pub fn base_factor(self) -> f64 {
        match self {
            PauseAlias::Long => 5.0,
            PauseAlias::Short => 1.0,
            PauseAlias::VeryShort => 0.25,
            PauseAlias::Tiny => 0.01,
        }
    }

    pub fn helper_name(self) -> &'static str {
        match self {
            PauseAlias::Long => "longPause",
            PauseAlias::Short => "shortPause",
            PauseAlias::VeryShort => "veryShortPause",
            PauseAlias::Tiny => "tinyPause",
        }
    }

    pub fn from_literal(msec: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|alias| alias.literal_msec() == msec)
    }
}

/// How many highlight+pause pairs precede the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightRepeat {
    Once,
    Twice,
}

impl HighlightRepeat {
    fn helper_prefix(self) -> &'static str {
        match self {
            HighlightRepeat::Once => "highlightAnd",
            HighlightRepeat::Twice => "highlightTwiceAnd",
        }
    }
}

/// One reconstructed call, either a raw command or a folded helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Call {
    Command(CommandCall),
    CommentDashed,
    Comment {
        text: String,
    },
    CommentBlock {
        text: String,
    },
    Pause {
        alias: PauseAlias,
    },
    Highlighted {
        repeat: HighlightRepeat,
        action: CommandCall,
    },
}

impl Call {
    pub fn as_command(&self) -> Option<&CommandCall> {
        match self {
            Call::Command(command) => Some(command),
            _ => None,
        }
    }

    pub fn is_command_named(&self, name: &str) -> bool {
        self.as_command().is_some_and(|command| command.is_named(name))
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Command(command) => {
                write!(f, "command_{}", command.name)?;
                command.fmt_args(f)
            }
            Call::CommentDashed => f.write_str("commentDashed()"),
            Call::Comment { text } => write!(f, "comment(\"{text}\")"),
            Call::CommentBlock { text } => write!(f, "commentBlock(\"{text}\")"),
            Call::Pause { alias } => write!(f, "{}()", alias.helper_name()),
            Call::Highlighted { repeat, action } => {
                f.write_str(repeat.helper_prefix())?;
                let mut chars = action.name.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}{}", first.to_uppercase(), chars.as_str())?;
                }
                action.fmt_args(f)
            }
        }
    }
}
