//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ConfigError, ResourceError, Stage};

/// A diagnostic wrapper for resource errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ResourceDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<ResourceError> for ResourceDiagnostic {
    fn from(e: ResourceError) -> Self {
        let help = match (e.stage, e.error.kind()) {
            (Stage::Read, std::io::ErrorKind::NotFound) => {
                "Check that the stanza file exists relative to the base directory"
            }
            (Stage::Write, _) => "Check that the target directory exists and is writable",
            _ => "Check the resource path and its permissions",
        };
        ResourceDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(Box::new(e.error)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<ResourceError> for miette::Report {
    fn from(e: ResourceError) -> Self {
        miette::Report::new(ResourceDiagnostic::from(e))
    }
}

impl From<ConfigError> for ResourceDiagnostic {
    fn from(e: ConfigError) -> Self {
        let help = match e {
            ConfigError::FaultIndexOutOfRange { .. } => {
                "fault_index is 0-based and must be below stanza_count"
            }
            _ => "Config files must end in .yaml, .yml or .json",
        };
        ResourceDiagnostic {
            message: e.to_string(),
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}
