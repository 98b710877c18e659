//! Generate recorder HTML test suites from typed steps and read them back.
//!
//! `encode` renders a [`model::Sequence`] into the recorder's table markup;
//! `decode` scans that markup and folds multi-row idioms back into the
//! authoring calls in [`script::ScriptBuilder`].
pub mod config;
pub mod credentials;
pub mod decode;
pub mod demo;
pub mod encode;
pub mod listing;
pub mod model;
pub mod output;
pub mod script;
