use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the price model or running inference.
/// A failed load is memoized and cloned out on every later call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("Model artifact not found at {}", .path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("Model artifact at {} is corrupt: {reason}", .path.display())]
    ArtifactCorrupt { path: PathBuf, reason: String },

    #[error("Prediction failed: {reason}")]
    PredictionError { reason: String },
}

/// A house attribute outside the domain its input widget allows
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeatureDomainError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_formatting() {
        let error = ModelError::ArtifactCorrupt {
            path: PathBuf::from("Housing.json"),
            reason: "expected value at line 1 column 1".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Housing.json"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn test_prediction_error_formatting() {
        let error = ModelError::PredictionError {
            reason: "shape mismatch".to_string(),
        };
        assert_eq!(error.to_string(), "Prediction failed: shape mismatch");
    }

    #[test]
    fn test_domain_error_formatting() {
        let error = FeatureDomainError::OutOfRange {
            field: "area",
            value: 999,
            min: 1000,
            max: 20000,
        };
        assert_eq!(error.to_string(), "area must be between 1000 and 20000, got 999");
    }
}
