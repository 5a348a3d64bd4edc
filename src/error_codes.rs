use std::fmt;

use anyhow::Error;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodedErrorKind {
    /// Bad invocation: unreadable input, conflicting flags.
    Usage,
    /// A catalog file that could not be read, parsed or validated.
    Config,
}

#[derive(Debug, Clone)]
pub struct CodedError {
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
    pub kind: CodedErrorKind,
}

impl CodedError {
    pub fn usage(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            kind: CodedErrorKind::Usage,
        }
    }

    pub fn config(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            kind: CodedErrorKind::Config,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind {
            CodedErrorKind::Usage => 2,
            CodedErrorKind::Config => 1,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            ok: false,
            error: ErrorEnvelopeBody {
                code: self.code.to_owned(),
                message: self.message.clone(),
                details: self.details.clone(),
            },
        }
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CodedError {}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub error: ErrorEnvelopeBody,
}

impl ErrorEnvelope {
    /// Envelope for any error; uncoded failures are reported as `UNEXPECTED`.
    pub fn from_error(error: &Error) -> Self {
        match find_coded_error(error) {
            Some(coded) => coded.envelope(),
            None => Self {
                ok: false,
                error: ErrorEnvelopeBody {
                    code: "UNEXPECTED".to_owned(),
                    message: format!("{error:#}"),
                    details: None,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelopeBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub fn find_coded_error(error: &Error) -> Option<&CodedError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CodedError>())
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};
    use serde_json::json;

    use super::*;

    #[test]
    fn coded_error_survives_added_context() {
        let error = Err::<(), _>(anyhow!(CodedError::config(
            "INVALID_CATALOG",
            "stages must hold exactly 3 entries",
        )
        .with_details(json!({ "field": "stages" }))))
        .context("failed to load catalog")
        .unwrap_err();

        let coded = find_coded_error(&error).expect("coded error should be in chain");
        assert_eq!(coded.code, "INVALID_CATALOG");
        assert_eq!(coded.exit_code(), 1);

        let envelope = serde_json::to_value(ErrorEnvelope::from_error(&error)).unwrap();
        assert_eq!(envelope["ok"], json!(false));
        assert_eq!(envelope["error"]["details"]["field"], json!("stages"));
    }

    #[test]
    fn uncoded_error_gets_generic_envelope() {
        let error = anyhow!("boom");
        let envelope = ErrorEnvelope::from_error(&error);
        assert_eq!(envelope.error.code, "UNEXPECTED");
        assert_eq!(envelope.error.message, "boom");
        assert!(envelope.error.details.is_none());
    }
}
