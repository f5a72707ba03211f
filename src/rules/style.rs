//! Default stylesheet rule synthesis

use serde_json::{json, Value};
use tracing::info;

use crate::plugin::{OptionalPlugin, PluginDescriptor};
use crate::resolve::{ModuleResolutionError, ModuleResolver};

/// File pattern the default stylesheet rule matches.
pub const STYLESHEET_TEST: &str = r"\.css$";

/// Runtime module that injects parsed stylesheets into the page.
pub const STYLE_INJECT_MODULE: &str = "style-loader";

/// Runtime module that parses stylesheets and their `@import` references.
pub const STYLE_PARSE_MODULE: &str = "css-loader";

/// Decide whether a default stylesheet rule is needed and build it.
///
/// Returns `None` when the style-processing addon is active; the addon
/// supplies its own rule. Applying the injection or parsing stage to files
/// they have already processed corrupts the output, so the final rule
/// sequence must contain at most one rule matching the stylesheet
/// extension. Callers never append a placeholder for the `None` case.
///
/// Both processing stages must resolve to installed modules; a missing
/// module is a hard failure.
pub fn default_style_rule(
    plugins: &[PluginDescriptor],
    modules: &dyn ModuleResolver,
) -> Result<Option<Value>, ModuleResolutionError> {
    if OptionalPlugin::StyleAddon.is_active(plugins) {
        return Ok(None);
    }

    info!("using default stylesheet rule");

    let inject = modules.resolve(STYLE_INJECT_MODULE)?;
    let parse = modules.resolve(STYLE_PARSE_MODULE)?;

    Ok(Some(json!({
        "test": STYLESHEET_TEST,
        // The rule acts by injecting styles; bundlers must not drop it as
        // dead code even though its result looks unused.
        "sideEffects": true,
        "use": [
            inject,
            {
                "loader": parse,
                // Resolve one level of stylesheet-internal @import references
                "options": { "importLoaders": 1 },
            },
        ],
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Installed;

    impl ModuleResolver for Installed {
        fn resolve(&self, module: &str) -> Result<String, ModuleResolutionError> {
            Ok(format!("/deps/{module}/index.js"))
        }
    }

    struct NothingInstalled;

    impl ModuleResolver for NothingInstalled {
        fn resolve(&self, module: &str) -> Result<String, ModuleResolutionError> {
            Err(ModuleResolutionError::new(module))
        }
    }

    #[test]
    fn test_default_rule_shape() {
        let rule = default_style_rule(&[], &Installed).unwrap().unwrap();

        assert_eq!(rule["test"], STYLESHEET_TEST);
        assert_eq!(rule["sideEffects"], true);

        let stages = rule["use"].as_array().unwrap();
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0], "/deps/style-loader/index.js");
        assert_eq!(stages[1]["loader"], "/deps/css-loader/index.js");
        assert_eq!(stages[1]["options"]["importLoaders"], 1);
    }

    #[test]
    fn test_addon_supplies_its_own_rule() {
        let plugins = [PluginDescriptor::name("@acme/addon-postcss")];
        let rule = default_style_rule(&plugins, &Installed).unwrap();
        assert!(rule.is_none());
    }

    #[test]
    fn test_missing_module_is_fatal() {
        let err = default_style_rule(&[], &NothingInstalled).unwrap_err();
        assert_eq!(err.module, "style-loader");
    }

    #[test]
    fn test_addon_active_skips_module_resolution() {
        // With the addon active no modules are needed at all
        let plugins = [PluginDescriptor::entry("addon-postcss")];
        assert!(default_style_rule(&plugins, &NothingInstalled)
            .unwrap()
            .is_none());
    }
}
