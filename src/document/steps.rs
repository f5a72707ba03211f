//! Named merge steps
//!
//! The final document is produced by applying an explicit, ordered list of
//! named steps to the base document. The list order is the application
//! order and is a contract of the composition pipeline:
//! style rule, asset rules, resolve fallback, cache, experiments.

use serde_json::{Map, Value};
use tracing::debug;

use super::merge::deep_merge;

/// A single named transformation of the document-so-far.
///
/// Steps are pure: each consumes the current document and returns a new
/// one. Nothing outside the step's target subtree is touched.
#[derive(Debug)]
pub struct MergeStep {
    name: &'static str,
    op: StepOp,
}

#[derive(Debug)]
enum StepOp {
    /// Append processing rules to the end of `module.rules`.
    AppendRules(Vec<Value>),
    /// Deep-merge a fragment at a path; the fragment wins on conflict.
    Overlay {
        path: &'static [&'static str],
        fragment: Value,
    },
    /// Deep-merge a fragment at a path; existing document values win.
    Underlay {
        path: &'static [&'static str],
        fragment: Value,
    },
}

impl MergeStep {
    /// Step that appends `rules` to the end of the `module.rules` sequence.
    pub fn append_rules(name: &'static str, rules: Vec<Value>) -> Self {
        Self {
            name,
            op: StepOp::AppendRules(rules),
        }
    }

    /// Step that merges `fragment` at `path`, overriding existing values.
    pub fn overlay(name: &'static str, path: &'static [&'static str], fragment: Value) -> Self {
        Self {
            name,
            op: StepOp::Overlay { path, fragment },
        }
    }

    /// Step that merges `fragment` at `path`, keeping existing values.
    pub fn underlay(name: &'static str, path: &'static [&'static str], fragment: Value) -> Self {
        Self {
            name,
            op: StepOp::Underlay { path, fragment },
        }
    }

    /// Step name, for logs and inspection.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this step, returning the new document.
    pub fn apply(self, doc: Value) -> Value {
        match self.op {
            StepOp::AppendRules(rules) => append_rules(doc, rules),
            StepOp::Overlay { path, fragment } => merge_at(doc, path, fragment, false),
            StepOp::Underlay { path, fragment } => merge_at(doc, path, fragment, true),
        }
    }
}

/// Apply steps in list order to the base document.
pub fn apply_steps(base: Value, steps: Vec<MergeStep>) -> Value {
    steps.into_iter().fold(base, |doc, step| {
        debug!(step = step.name(), "applying merge step");
        step.apply(doc)
    })
}

/// View a value as a mapping. Documents are mappings by contract; a missing
/// subtree (`null`) starts empty.
fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn append_rules(doc: Value, rules: Vec<Value>) -> Value {
    let mut root = into_object(doc);
    let mut module = into_object(root.remove("module").unwrap_or(Value::Null));
    let mut existing = match module.remove("rules") {
        Some(Value::Array(rules)) => rules,
        _ => Vec::new(),
    };
    existing.extend(rules);
    module.insert("rules".to_string(), Value::Array(existing));
    root.insert("module".to_string(), Value::Object(module));
    Value::Object(root)
}

fn merge_at(doc: Value, path: &[&str], fragment: Value, keep_existing: bool) -> Value {
    let Some((head, rest)) = path.split_first() else {
        return match (doc, keep_existing) {
            // Absent subtree: the fragment stands alone either way
            (Value::Null, _) => fragment,
            (existing, true) => deep_merge(fragment, existing),
            (existing, false) => deep_merge(existing, fragment),
        };
    };
    let mut root = into_object(doc);
    let child = root.remove(*head).unwrap_or(Value::Null);
    root.insert(
        (*head).to_string(),
        merge_at(child, rest, fragment, keep_existing),
    );
    Value::Object(root)
}
