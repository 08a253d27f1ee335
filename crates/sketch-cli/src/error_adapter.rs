//! Error adapter for converting SketchError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error as StdError, fmt};

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler};

use sketch::SketchError;

use crate::config::ConfigError;

/// Adapter for a single [`SketchError`].
///
/// Configuration failures are looked up through the error's source so the
/// diagnostic can point at the specific problem with the file.
pub struct ErrorAdapter<'a> {
    err: &'a SketchError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a SketchError) -> Self {
        Self { err }
    }

    fn config_error(&self) -> Option<&'a ConfigError> {
        match self.err {
            SketchError::Config(source) => source.downcast_ref::<ConfigError>(),
            SketchError::Io(_) => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl StdError for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.err.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match (self.err, self.config_error()) {
            (SketchError::Io(_), _) => "sketch::io",
            (SketchError::Config(_), Some(ConfigError::MissingFile(_))) => "sketch::config::missing",
            (SketchError::Config(_), Some(ConfigError::Read { .. })) => "sketch::config::read",
            (SketchError::Config(_), Some(ConfigError::Parse { .. })) => "sketch::config::parse",
            (SketchError::Config(_), None) => "sketch::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match (self.err, self.config_error()) {
            (SketchError::Io(_), _) => "check that the output path is writable",
            (SketchError::Config(_), Some(ConfigError::MissingFile(_))) => {
                "pass an existing file with --config, or omit it to use the defaults"
            }
            (SketchError::Config(_), Some(ConfigError::Read { .. })) => {
                "check the permissions of the configuration file"
            }
            (SketchError::Config(_), _) => {
                "expected a TOML file with a [render] table of indent_step and indent"
            }
        };
        Some(Box::new(help))
    }
}

/// Renders `err` as a miette report, including its chain of causes.
pub fn render_report(err: &SketchError) -> String {
    let mut report = String::new();
    if GraphicalReportHandler::new()
        .render_report(&mut report, &ErrorAdapter::new(err))
        .is_err()
    {
        // Plain message if the graphical layout cannot be produced.
        report = err.to_string();
    }
    report
}
