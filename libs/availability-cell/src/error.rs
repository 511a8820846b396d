use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// Stored time data that is not `HH:MM` or `HH:MM:SS`.
    #[error("malformed {field} value: {value:?}")]
    MalformedTime { field: &'static str, value: String },

    #[error("lookup failed: {0}")]
    Lookup(#[from] anyhow::Error),
}

impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::MalformedTime { .. } => AppError::Internal(err.to_string()),
            // Alternate form keeps the whole context chain.
            AvailabilityError::Lookup(e) => AppError::ExternalService(format!("{:#}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn test_lookup_error_keeps_upstream_cause() {
        let upstream: anyhow::Result<()> = Err(anyhow!("API error (503): service unavailable"));
        let err = upstream.context("failed to load booked appointments").unwrap_err();

        match AppError::from(AvailabilityError::Lookup(err)) {
            AppError::ExternalService(msg) => {
                assert!(msg.starts_with("failed to load booked appointments"));
                assert!(msg.contains("service unavailable"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_time_is_internal() {
        let err = AvailabilityError::MalformedTime { field: "start_time", value: "9am".into() };
        assert!(matches!(AppError::from(err), AppError::Internal(_)));
    }
}
