//! CLI error types with miette diagnostics.
//!
//! Maps `ModelError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use cwmp_model::{ModelError, ParameterFault};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const NOT_WRITABLE: i32 = 5;
    pub const VIOLATIONS: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Addressing ───────────────────────────────────────────────────

    #[error("Invalid path '{path}': {reason}")]
    #[diagnostic(
        code(cwmp::invalid_path),
        help(
            "Parameter paths look like Device.DeviceInfo.UpTime;\n\
             object paths end in '.', e.g. Device.Hosts.Host.2."
        )
    )]
    InvalidPath { path: String, reason: String },

    #[error("{message}")]
    #[diagnostic(
        code(cwmp::not_found),
        help("Run: cwmp names {file} {parent} --next-level")
    )]
    NotFound {
        message: String,
        file: String,
        parent: String,
    },

    #[error("Parameter '{path}' is not writable")]
    #[diagnostic(
        code(cwmp::not_writable),
        help("Read-only parameters are reported by the device, not configured.")
    )]
    NotWritable { path: String },

    // ── Values ───────────────────────────────────────────────────────

    #[error("Set rejected; no parameter was changed")]
    #[diagnostic(code(cwmp::set_rejected), help("{details}"))]
    SetRejected {
        details: String,
        faults: Vec<ParameterFault>,
    },

    #[error("{count} constraint violation(s) in {file}")]
    #[diagnostic(
        code(cwmp::violations),
        help("Run: cwmp validate {file}")
    )]
    Violations { count: usize, file: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(cwmp::validation))]
    Validation { field: String, reason: String },

    // ── Documents ────────────────────────────────────────────────────

    #[error("Cannot tell the encoding of '{path}'")]
    #[diagnostic(
        code(cwmp::unknown_format),
        help("Use a .xml, .json, .yaml or .yml file name.")
    )]
    UnknownFormat { path: String },

    #[error("Could not decode '{path}'")]
    #[diagnostic(code(cwmp::decode))]
    Decode {
        path: String,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    #[diagnostic(code(cwmp::model))]
    Model(ModelError),

    #[error("Could not access '{path}'")]
    #[diagnostic(code(cwmp::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(cwmp::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(cwmp::config))]
    Config(Box<figment::Error>),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPath { .. }
            | Self::Validation { .. }
            | Self::UnknownFormat { .. }
            | Self::ConfigExists { .. } => exit_code::USAGE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NotWritable { .. } => exit_code::NOT_WRITABLE,
            Self::Violations { .. } => exit_code::VIOLATIONS,
            Self::SetRejected { faults, .. } => set_rejected_code(faults),
            Self::Decode { .. } | Self::Model(_) | Self::Io { .. } | Self::Config(_) => {
                exit_code::GENERAL
            }
        }
    }

    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn decode(path: &std::path::Path, source: ModelError) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            source,
        }
    }

    /// Like `From<ModelError>`, with the document named in help text.
    pub fn in_file(err: ModelError, file: &std::path::Path) -> Self {
        match Self::from(err) {
            Self::NotFound {
                message, parent, ..
            } => Self::NotFound {
                message,
                file: file.display().to_string(),
                parent,
            },
            other => other,
        }
    }
}

/// The most specific code among the faults: unknown names first, then
/// read-only parameters, then bad values.
fn set_rejected_code(faults: &[ParameterFault]) -> i32 {
    let has = |code: u32| faults.iter().any(|f| f.code == code);
    if has(9005) {
        exit_code::NOT_FOUND
    } else if has(9008) {
        exit_code::NOT_WRITABLE
    } else {
        exit_code::USAGE
    }
}

// ── ModelError → CliError mapping ────────────────────────────────────

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidPath { path, reason } => Self::InvalidPath { path, reason },

            ModelError::UnknownParameter { ref object, .. } => Self::NotFound {
                parent: object.clone(),
                message: err.to_string(),
                file: "FILE".into(),
            },

            ModelError::UnknownObject { ref path } | ModelError::InstanceNotFound { ref path, .. } => {
                Self::NotFound {
                    parent: parent_of(path),
                    message: err.to_string(),
                    file: "FILE".into(),
                }
            }

            ModelError::NotATable { path } => Self::Validation {
                field: "path".into(),
                reason: format!("'{path}' is not a multi-instance object"),
            },

            ModelError::NotWritable { path } => Self::NotWritable { path },

            ModelError::SetRejected { faults } => Self::SetRejected {
                details: faults
                    .iter()
                    .map(|f| format!("{} ({}): {}", f.name, f.code, f.message))
                    .collect::<Vec<_>>()
                    .join("\n"),
                faults,
            },

            ModelError::InvalidValue { .. }
            | ModelError::ConstraintViolation { .. }
            | ModelError::TypeMismatch { .. } => Self::Validation {
                field: "value".into(),
                reason: err.to_string(),
            },

            other => Self::Model(other),
        }
    }
}

/// `Device.Hosts.Host.9.` -> `Device.Hosts.Host.`
fn parent_of(path: &str) -> String {
    let trimmed = path.trim_end_matches('.');
    match trimmed.rfind('.') {
        Some(i) => trimmed[..=i].to_owned(),
        None => String::new(),
    }
}
