//! External resolver seams
//!
//! Composition consumes two collaborators through traits:
//!
//! - `ConfigResolver`: fetches named configuration sections from the active
//!   preset chain. Async; called exactly once per composition.
//! - `ModuleResolver`: resolves runtime processing modules (the stylesheet
//!   injection and parsing stages) to concrete addresses.
//!
//! Both failure types are fatal to composition and propagate unmodified.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// The configuration resolver could not produce a section.
#[derive(Debug, Error)]
#[error("failed to resolve configuration section '{section}': {message}")]
pub struct ResolutionError {
    pub section: String,
    pub message: String,
}

impl ResolutionError {
    pub fn new(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            message: message.into(),
        }
    }
}

/// Resolves named configuration sections from the active preset chain.
#[async_trait]
pub trait ConfigResolver: Send + Sync {
    /// Resolve a configuration section by name.
    async fn apply(&self, section: &str) -> Result<Value, ResolutionError>;
}

/// A runtime processing module is not installed.
///
/// This is a hard failure: a rule pointing at a missing module would fail
/// later, non-deterministically, deep inside the build instead of at
/// configuration time.
#[derive(Debug, Error)]
#[error("processing module '{module}' is not installed")]
pub struct ModuleResolutionError {
    pub module: String,
}

impl ModuleResolutionError {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }
}

/// Resolves runtime processing modules to concrete addresses.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, module: &str) -> Result<String, ModuleResolutionError>;
}
