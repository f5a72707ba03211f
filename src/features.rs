//! Environment feature gate
//!
//! Translates the builder options found in the `core` configuration section
//! into additive document fragments:
//!
//! - `fsCache` -> a persistent filesystem-backed `cache` setting
//! - `lazyCompilation` -> a deferred-compilation `experiments` entry,
//!   development mode only
//!
//! The two flags are independent and their fragments land in distinct
//! subtrees; they never interact with each other or with rule synthesis.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::document::BuildMode;

/// Recognized builder options, nested in the `core` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuilderOptions {
    /// Enable persistent on-disk caching between builds.
    pub fs_cache: bool,
    /// Defer compilation of non-entry modules until first use.
    pub lazy_compilation: bool,
}

impl BuilderOptions {
    /// Extract builder options from the resolved `core` section.
    ///
    /// The `builder` value may be a bare builder name (a string), an object
    /// with an `options` map, or missing entirely. Anything but a
    /// well-formed options map yields the all-false defaults.
    pub fn from_core_section(core: &Value) -> Self {
        core.get("builder")
            .and_then(|builder| builder.get("options"))
            .and_then(|options| serde_json::from_value(options.clone()).ok())
            .unwrap_or_default()
    }

    /// Persistent-cache fragment, if enabled.
    pub fn cache_fragment(&self) -> Option<Value> {
        self.fs_cache.then(|| json!({ "type": "filesystem" }))
    }

    /// Lazy-compilation fragment, if enabled for this mode.
    ///
    /// Production builds require deterministic complete output, so the flag
    /// is ignored there. Entries always compile eagerly; only non-entry
    /// modules defer.
    pub fn lazy_compilation_fragment(&self, mode: BuildMode) -> Option<Value> {
        (self.lazy_compilation && !mode.is_production())
            .then(|| json!({ "lazyCompilation": { "entries": false } }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_from_builder_object() {
        let core = json!({
            "builder": {
                "name": "bundler-v5",
                "options": { "fsCache": true, "lazyCompilation": true }
            }
        });
        let options = BuilderOptions::from_core_section(&core);
        assert!(options.fs_cache);
        assert!(options.lazy_compilation);
    }

    #[test]
    fn test_builder_string_yields_defaults() {
        let core = json!({ "builder": "bundler-v5" });
        assert_eq!(BuilderOptions::from_core_section(&core), BuilderOptions::default());
    }

    #[test]
    fn test_missing_builder_yields_defaults() {
        let core = json!({ "disableTelemetry": true });
        assert_eq!(BuilderOptions::from_core_section(&core), BuilderOptions::default());
    }

    #[test]
    fn test_partial_options_default_the_rest() {
        let core = json!({ "builder": { "options": { "fsCache": true } } });
        let options = BuilderOptions::from_core_section(&core);
        assert!(options.fs_cache);
        assert!(!options.lazy_compilation);
    }

    #[test]
    fn test_cache_fragment_gated_on_flag() {
        let on = BuilderOptions {
            fs_cache: true,
            lazy_compilation: false,
        };
        assert_eq!(on.cache_fragment(), Some(json!({ "type": "filesystem" })));
        assert_eq!(BuilderOptions::default().cache_fragment(), None);
    }

    #[test]
    fn test_lazy_compilation_suppressed_in_production() {
        let options = BuilderOptions {
            fs_cache: false,
            lazy_compilation: true,
        };
        assert_eq!(options.lazy_compilation_fragment(BuildMode::Production), None);
        assert_eq!(
            options.lazy_compilation_fragment(BuildMode::Development),
            Some(json!({ "lazyCompilation": { "entries": false } }))
        );
    }
}
