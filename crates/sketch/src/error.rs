//! Error types for Sketch operations.
//!
//! This module provides the main error type [`SketchError`] which wraps the
//! error conditions that can occur while configuring and rendering pictures.

use std::{error::Error as StdError, io};

use thiserror::Error;

/// Boxed cause of a configuration failure.
pub type ConfigSource = Box<dyn StdError + Send + Sync + 'static>;

/// The main error type for Sketch operations.
///
/// # Configuration Variants
///
/// Configuration is loaded outside this crate, so the `Config` variant keeps
/// the loader's own error as its [`source`](StdError::source). Callers can
/// downcast it to recover the concrete failure.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error")]
    Config(#[source] ConfigSource),
}

impl SketchError {
    /// Create a new `Config` error wrapping the loader's error.
    pub fn new_config_error(err: impl Into<ConfigSource>) -> Self {
        Self::Config(err.into())
    }
}
