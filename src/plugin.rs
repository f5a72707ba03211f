//! Plugin presence oracle
//!
//! Answers "is optional plugin X active?" from an ordered list of plugin
//! descriptors supplied by an external registry. The registry is loosely
//! typed, so descriptors that are neither a name string nor an object with
//! a `name` field are treated as non-matching rather than rejected.

use serde::Deserialize;
use serde_json::Value;

/// A plugin registry entry: a bare module name, an object carrying a
/// `name` field, or anything else a loosely-typed registry may hand over.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PluginDescriptor {
    Name(String),
    Entry { name: String },
    Other(Value),
}

impl PluginDescriptor {
    /// Build a bare-name descriptor.
    pub fn name(name: impl Into<String>) -> Self {
        PluginDescriptor::Name(name.into())
    }

    /// Build a structured descriptor.
    pub fn entry(name: impl Into<String>) -> Self {
        PluginDescriptor::Entry { name: name.into() }
    }

    /// The identity string used for matching, if the descriptor has one.
    fn identity(&self) -> Option<&str> {
        match self {
            PluginDescriptor::Name(name) => Some(name),
            PluginDescriptor::Entry { name } => Some(name),
            PluginDescriptor::Other(_) => None,
        }
    }
}

/// The optional plugins this engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalPlugin {
    /// Opt-out framework preset that assumes total ownership of the
    /// pipeline; when active, composition leaves the base document alone.
    FrameworkPreset,
    /// Opt-in style-processing addon that supplies its own stylesheet rule.
    StyleAddon,
}

impl OptionalPlugin {
    /// Canonical identity of this plugin, as a single module-path segment.
    pub fn identity(self) -> &'static str {
        match self {
            OptionalPlugin::FrameworkPreset => "preset-create-react-app",
            OptionalPlugin::StyleAddon => "addon-postcss",
        }
    }

    /// Whether this plugin appears in the descriptor list.
    ///
    /// An empty list means the plugin is absent; absence of information is
    /// never an error.
    pub fn is_active(self, descriptors: &[PluginDescriptor]) -> bool {
        descriptors.iter().any(|descriptor| self.matches(descriptor))
    }

    fn matches(self, descriptor: &PluginDescriptor) -> bool {
        let Some(raw) = descriptor.identity() else {
            return false;
        };
        // Registries on Windows report backslash-separated module paths.
        let normalized = raw.replace('\\', "/");
        normalized
            .split('/')
            .any(|segment| segment == self.identity())
    }
}
