//! Remote emergency-service operations.
//!
//! Two independent calls share one transport pattern: JSON POST, strict
//! typed parse on success, and a single normalized error shape on any
//! failure. The UI shows `EmergencyApiError`'s `Display` text verbatim.

pub mod client;

pub use client::*;

use thiserror::Error;

/// Which remote operation produced a result or failure.
///
/// Carried through error normalization so each operation keeps its own
/// user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Guidance,
    HospitalRecommendation,
}

impl Operation {
    /// Korean label used in failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Guidance => "응급 가이드",
            Self::HospitalRecommendation => "병원 추천",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guidance => write!(f, "guidance"),
            Self::HospitalRecommendation => write!(f, "hospital_recommendation"),
        }
    }
}

/// Normalized failure of a remote emergency operation.
///
/// Every variant's `Display` output is ready for the UI; the original
/// cause is preserved as `source` where one exists.
#[derive(Debug, Error)]
pub enum EmergencyApiError {
    /// The service answered with a non-success status. `message` is the
    /// best-effort text extracted by the normalization rules.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// No usable response: connection refused, DNS failure, interrupted
    /// transfer.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered 2xx but the body did not parse as the
    /// expected model.
    #[error("{message}")]
    MalformedResponse {
        message: String,
        #[source]
        source: reqwest::Error,
    },
}

impl EmergencyApiError {
    /// HTTP status code, when the failure came from a received response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_labels_differ() {
        assert_ne!(
            Operation::Guidance.label(),
            Operation::HospitalRecommendation.label()
        );
    }

    #[test]
    fn operation_display_is_wire_friendly() {
        assert_eq!(Operation::Guidance.to_string(), "guidance");
        assert_eq!(
            Operation::HospitalRecommendation.to_string(),
            "hospital_recommendation"
        );
    }

    #[test]
    fn http_error_displays_its_normalized_message() {
        let error = EmergencyApiError::Http {
            status: 503,
            message: "점검 중입니다".into(),
        };
        assert_eq!(error.to_string(), "점검 중입니다");
        assert_eq!(error.status(), Some(503));
    }
}
