//! Processing rule synthesis
//!
//! Rules are pattern-to-action bindings stored as document values in
//! `module.rules`. The engine synthesizes at most one stylesheet rule and
//! exactly two media rules per composition.

mod assets;
mod style;

pub use assets::{asset_rules, INLINE_THRESHOLD_BYTES, LARGE_MEDIA_TEST, SMALL_MEDIA_TEST};
pub use style::{default_style_rule, STYLESHEET_TEST, STYLE_INJECT_MODULE, STYLE_PARSE_MODULE};
