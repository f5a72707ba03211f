//! Configuration document model
//!
//! A document is a `serde_json::Value` tree of nested mappings. This module
//! provides the deep-merge primitive, the named merge-step engine, and the
//! build mode derived from the document.

mod merge;
mod steps;

pub use merge::deep_merge;
pub use steps::{apply_steps, MergeStep};

use serde_json::Value;

/// Build mode, derived from the base document's `mode` key.
///
/// Anything other than an explicit `"development"` counts as production,
/// including an absent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Read the build mode from a document.
    pub fn from_document(doc: &Value) -> Self {
        match doc.get("mode").and_then(Value::as_str) {
            Some("development") => BuildMode::Development,
            _ => BuildMode::Production,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }
}
