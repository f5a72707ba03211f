//! preview-compose - Preview bundler configuration composition
//!
//! This crate composes a final bundler configuration document from a base
//! document plus optional, plugin- and environment-dependent fragments:
//!
//! - a default stylesheet rule, unless an active plugin supplies its own
//! - two mode-aware media asset rules
//! - resolve fallbacks for modules absent from the bundle target
//! - persistent-cache and lazy-compilation settings from builder options
//!
//! The engine never mutates the base document in place; it returns a new
//! document that is a structural superset of the input. It does not execute
//! builds, does not validate the result beyond shape, and does not discover
//! plugins: callers supply the active plugin list and the two resolver
//! collaborators.

pub mod compose;
pub mod document;
pub mod error;
pub mod features;
pub mod plugin;
pub mod resolve;
pub mod rules;

pub use compose::{compose, ComposeOptions, CORE_SECTION};
pub use document::{apply_steps, deep_merge, BuildMode, MergeStep};
pub use error::ComposeError;
pub use features::BuilderOptions;
pub use plugin::{OptionalPlugin, PluginDescriptor};
pub use resolve::{ConfigResolver, ModuleResolver, ModuleResolutionError, ResolutionError};
pub use rules::{
    asset_rules, default_style_rule, INLINE_THRESHOLD_BYTES, LARGE_MEDIA_TEST, SMALL_MEDIA_TEST,
    STYLESHEET_TEST,
};
