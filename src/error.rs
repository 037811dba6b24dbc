//! Error types for problem construction and evaluation.
//!
//! Only configuration mistakes are reported through [`WfgError`]. Domain
//! violations inside the transition and shape functions are programming
//! errors and panic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WfgError {
    /// The problem name does not match any registered problem
    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    /// k, M or the decision vector length are incompatible
    #[error("Invalid arguments for {problem}: k={k}, n={n}, M={m} (need 1 <= k < n, M >= 2, k mod (M-1) == 0)")]
    InvalidArguments {
        problem: String,
        k: usize,
        n: usize,
        m: usize,
    },

    /// The problem reduces distance parameters in pairs
    #[error("{problem} requires an even number of distance parameters, got {l}")]
    OddDistanceCount { problem: String, l: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A decision variable lies outside [0, bound]
    #[error("Decision variable z[{index}] = {value} is outside [0, {bound}]")]
    OutOfBounds { index: usize, value: f64, bound: f64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WfgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WfgError::UnknownProblem("WFG10".to_string());
        assert_eq!(err.to_string(), "Unknown problem: WFG10");

        let err = WfgError::OddDistanceCount {
            problem: "WFG2".to_string(),
            l: 3,
        };
        assert_eq!(
            err.to_string(),
            "WFG2 requires an even number of distance parameters, got 3"
        );

        let err = WfgError::DimensionMismatch {
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 8, got 7");
    }

    #[test]
    fn test_serde_error_converts() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WfgError = serde_err.into();
        assert!(matches!(err, WfgError::Serde(_)));
    }
}
