//! Error types for composition

use thiserror::Error;

use crate::resolve::{ModuleResolutionError, ResolutionError};

/// Errors from a composition call.
///
/// Malformed plugin descriptors are deliberately not represented here: the
/// presence oracle treats them as non-matching, never as failures.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The core configuration section could not be resolved.
    #[error("configuration resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    /// A processing module needed for the default stylesheet rule is missing.
    #[error("module resolution failed: {0}")]
    ModuleResolution(#[from] ModuleResolutionError),
}
