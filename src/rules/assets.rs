//! Asset rule synthesis
//!
//! Two rules are always added, independent of plugin state:
//!
//! - large-format media (images, fonts, documents) is emitted out-of-band
//! - small-format media (audio, video) is inlined below a size threshold
//!   and emitted otherwise
//!
//! Output filenames are mode-aware: production uses a content-hash name for
//! long-term caching, development keeps the source path so emitted files
//! stay recognizable during iteration.

use serde_json::{json, Value};

use crate::document::BuildMode;

/// File pattern for large-format media routed to out-of-band emission.
/// An optional query suffix (`logo.svg?v=2`) is tolerated.
pub const LARGE_MEDIA_TEST: &str =
    r"\.(svg|ico|jpg|jpeg|png|apng|gif|eot|otf|webp|ttf|woff|woff2|cur|ani|pdf)(\?.*)?$";

/// File pattern for small-format media eligible for inlining.
pub const SMALL_MEDIA_TEST: &str = r"\.(mp4|webm|wav|mp3|m4a|aac|oga)(\?.*)?$";

/// Size threshold in bytes below which small media is inlined.
pub const INLINE_THRESHOLD_BYTES: u64 = 10_000;

fn filename_template(mode: BuildMode) -> &'static str {
    match mode {
        BuildMode::Production => "static/media/[name].[contenthash:8][ext]",
        BuildMode::Development => "static/media/[path][name][ext]",
    }
}

/// Build the two unconditional media rules for the given build mode.
pub fn asset_rules(mode: BuildMode) -> Vec<Value> {
    let filename = filename_template(mode);
    vec![
        json!({
            "test": LARGE_MEDIA_TEST,
            "type": "asset/resource",
            "generator": { "filename": filename },
        }),
        json!({
            "test": SMALL_MEDIA_TEST,
            "type": "asset",
            "parser": { "dataUrlCondition": { "maxSize": INLINE_THRESHOLD_BYTES } },
            "generator": { "filename": filename },
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex_lite::Regex;

    #[test]
    fn test_large_media_pattern_coverage() {
        let pattern = Regex::new(LARGE_MEDIA_TEST).unwrap();
        for file in [
            "logo.svg",
            "favicon.ico",
            "photo.jpeg",
            "font.woff2",
            "manual.pdf",
            "logo.svg?v=2",
        ] {
            assert!(pattern.is_match(file), "expected match: {file}");
        }
        for file in ["index.css", "clip.mp4", "woff2", "photo.jpeg.bak"] {
            assert!(!pattern.is_match(file), "unexpected match: {file}");
        }
    }

    #[test]
    fn test_small_media_pattern_coverage() {
        let pattern = Regex::new(SMALL_MEDIA_TEST).unwrap();
        for file in ["clip.mp4", "track.mp3", "voice.oga", "clip.webm?inline"] {
            assert!(pattern.is_match(file), "expected match: {file}");
        }
        for file in ["logo.svg", "clip.mp4.txt"] {
            assert!(!pattern.is_match(file), "unexpected match: {file}");
        }
    }

    #[test]
    fn test_production_uses_content_hash_names() {
        let rules = asset_rules(BuildMode::Production);
        for rule in &rules {
            let filename = rule["generator"]["filename"].as_str().unwrap();
            assert!(filename.contains("[contenthash:8]"), "got: {filename}");
            assert!(!filename.contains("[path]"));
        }
    }

    #[test]
    fn test_development_preserves_source_paths() {
        let rules = asset_rules(BuildMode::Development);
        for rule in &rules {
            let filename = rule["generator"]["filename"].as_str().unwrap();
            assert!(filename.contains("[path]"), "got: {filename}");
            assert!(!filename.contains("[contenthash"));
        }
    }

    #[test]
    fn test_inline_threshold_boundaries() {
        let rules = asset_rules(BuildMode::Development);
        let declared = rules[1]["parser"]["dataUrlCondition"]["maxSize"]
            .as_u64()
            .unwrap();
        assert_eq!(declared, 10_000);

        // Inline iff the file fits within the declared threshold
        let inlined = |size: u64| size <= declared;
        assert!(inlined(9_999));
        assert!(inlined(10_000));
        assert!(!inlined(10_001));
    }

    #[test]
    fn test_only_small_media_rule_declares_threshold() {
        let rules = asset_rules(BuildMode::Production);
        assert_eq!(rules[0]["type"], "asset/resource");
        assert!(rules[0].get("parser").is_none());
        assert_eq!(rules[1]["type"], "asset");
    }
}
