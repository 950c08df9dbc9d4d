// ── Model error types ──
//
// Every fallible operation in the crate returns `ModelError`. Variants
// map onto CWMP fault codes so an agent built on top of the model can
// answer an RPC without re-classifying failures.

use thiserror::Error;

use crate::value::ParamType;

/// CWMP fault codes (TR-069 Annex A, table 13) produced by this crate.
pub mod fault_code {
    pub const INTERNAL_ERROR: u32 = 9002;
    pub const INVALID_ARGUMENTS: u32 = 9003;
    pub const INVALID_PARAMETER_NAME: u32 = 9005;
    pub const INVALID_PARAMETER_TYPE: u32 = 9006;
    pub const INVALID_PARAMETER_VALUE: u32 = 9007;
    pub const NON_WRITABLE_PARAMETER: u32 = 9008;
}

/// One rejected entry of a `SetParameterValues`-style request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParameterFault {
    pub name: String,
    pub code: u32,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ModelError {
    // ── Addressing ───────────────────────────────────────────────────
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("unknown parameter '{name}' in {object}")]
    UnknownParameter { object: String, name: String },

    #[error("no object at '{path}'")]
    UnknownObject { path: String },

    #[error("no instance {instance} in table '{path}'")]
    InstanceNotFound { path: String, instance: String },

    #[error("instance {instance} already exists in table '{path}'")]
    DuplicateInstance { path: String, instance: u32 },

    #[error("'{path}' is not a multi-instance object")]
    NotATable { path: String },

    // ── Values ───────────────────────────────────────────────────────
    #[error("parameter '{path}' is not writable")]
    NotWritable { path: String },

    #[error("parameter '{name}' expects {expected}")]
    TypeMismatch { name: String, expected: ParamType },

    #[error("invalid {kind} value '{value}': {reason}")]
    InvalidValue {
        kind: ParamType,
        value: String,
        reason: String,
    },

    #[error("value of '{path}' violates its constraints: {reason}")]
    ConstraintViolation { path: String, reason: String },

    #[error("set rejected: {} parameter(s) faulted", faults.len())]
    SetRejected { faults: Vec<ParameterFault> },

    // ── Codecs ───────────────────────────────────────────────────────
    #[error("XML error: {message}")]
    Xml { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ModelError {
    /// The CWMP fault code an agent would report for this error.
    pub fn fault_code(&self) -> u32 {
        match self {
            Self::InvalidPath { .. }
            | Self::UnknownParameter { .. }
            | Self::UnknownObject { .. }
            | Self::InstanceNotFound { .. }
            | Self::NotATable { .. } => fault_code::INVALID_PARAMETER_NAME,
            Self::TypeMismatch { .. } => fault_code::INVALID_PARAMETER_TYPE,
            Self::InvalidValue { .. } | Self::ConstraintViolation { .. } => {
                fault_code::INVALID_PARAMETER_VALUE
            }
            Self::NotWritable { .. } => fault_code::NON_WRITABLE_PARAMETER,
            Self::SetRejected { .. } | Self::DuplicateInstance { .. } => {
                fault_code::INVALID_ARGUMENTS
            }
            Self::Xml { .. } | Self::Json(_) | Self::Yaml(_) => fault_code::INTERNAL_ERROR,
        }
    }

    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        Self::Xml {
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_codes_follow_cwmp_table() {
        let err = ModelError::NotWritable {
            path: "Device.DeviceInfo.UpTime".into(),
        };
        assert_eq!(err.fault_code(), 9008);

        let err = ModelError::UnknownObject {
            path: "Device.Bogus.".into(),
        };
        assert_eq!(err.fault_code(), 9005);

        let err = ModelError::InvalidValue {
            kind: ParamType::UnsignedInt,
            value: "-1".into(),
            reason: "negative".into(),
        };
        assert_eq!(err.fault_code(), 9007);
    }

    #[test]
    fn set_rejected_counts_faults() {
        let err = ModelError::SetRejected {
            faults: vec![
                ParameterFault {
                    name: "a".into(),
                    code: 9008,
                    message: "x".into(),
                },
                ParameterFault {
                    name: "b".into(),
                    code: 9007,
                    message: "y".into(),
                },
            ],
        };
        assert_eq!(err.to_string(), "set rejected: 2 parameter(s) faulted");
        assert_eq!(err.fault_code(), 9003);
    }
}
