//! Composition entry point
//!
//! Orchestrates the four stages over a base document:
//!
//! 1. Query the plugin presence oracle; the framework preset, when active,
//!    owns the whole pipeline and composition returns the base untouched.
//! 2. Synthesize the default stylesheet rule, unless the style addon
//!    supplies its own.
//! 3. Synthesize the two media asset rules (always).
//! 4. Fetch builder options from the `core` section (the single suspension
//!    point) and translate the feature flags into fragments.
//!
//! The fragments are then merged in a fixed, named order: style rule,
//! asset rules, resolve fallback, cache, experiments.

use serde_json::{json, Value};
use tracing::debug;

use crate::document::{apply_steps, BuildMode, MergeStep};
use crate::error::ComposeError;
use crate::features::BuilderOptions;
use crate::plugin::{OptionalPlugin, PluginDescriptor};
use crate::resolve::{ConfigResolver, ModuleResolver};
use crate::rules::{asset_rules, default_style_rule};

/// Name of the configuration section holding builder options.
pub const CORE_SECTION: &str = "core";

/// Everything a composition call needs besides the base document.
pub struct ComposeOptions<'a> {
    /// Active plugin descriptors, in registry order.
    pub plugins: &'a [PluginDescriptor],
    /// Resolver for named configuration sections.
    pub config: &'a dyn ConfigResolver,
    /// Resolver for runtime processing modules.
    pub modules: &'a dyn ModuleResolver,
}

/// Compose the final configuration document.
///
/// The base document is consumed and returned as part of a structural
/// superset; unrelated fields pass through unchanged. The call holds no
/// state, so concurrent compositions for independent build targets are
/// fully isolated.
pub async fn compose(base: Value, options: &ComposeOptions<'_>) -> Result<Value, ComposeError> {
    if OptionalPlugin::FrameworkPreset.is_active(options.plugins) {
        debug!("framework preset active, leaving base configuration untouched");
        return Ok(base);
    }

    let mode = BuildMode::from_document(&base);

    let style_rule = default_style_rule(options.plugins, options.modules)?;

    let core = options.config.apply(CORE_SECTION).await?;
    let builder = BuilderOptions::from_core_section(&core);

    let mut steps = Vec::new();
    if let Some(rule) = style_rule {
        steps.push(MergeStep::append_rules("style-rule", vec![rule]));
    }
    steps.push(MergeStep::append_rules("asset-rules", asset_rules(mode)));
    steps.push(MergeStep::underlay(
        "resolve-fallback",
        &["resolve", "fallback"],
        json!({ "crypto": false, "assert": false }),
    ));
    if let Some(cache) = builder.cache_fragment() {
        steps.push(MergeStep::overlay("cache", &["cache"], cache));
    }
    if let Some(lazy) = builder.lazy_compilation_fragment(mode) {
        steps.push(MergeStep::overlay("experiments", &["experiments"], lazy));
    }

    Ok(apply_steps(base, steps))
}
