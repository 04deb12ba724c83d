//! Error type shared by the vector arithmetic and the perceptron engine.

use thiserror::Error;

/// Errors raised while combining vectors or running a training session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerceptronError {
    /// Two vectors of different dimensionality were added, subtracted or multiplied.
    #[error("vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    /// Training needs at least one positive example to fix the dimension.
    #[error("positive training set must not be empty")]
    EmptyTrainingSet,
    /// The epoch budget must allow at least one sweep.
    #[error("max_epochs must be greater than 0")]
    InvalidEpochBudget,
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PerceptronError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(err.to_string(), "vector dimensions differ: 2 vs 3");
        assert_eq!(
            PerceptronError::InvalidEpochBudget.to_string(),
            "max_epochs must be greater than 0"
        );
    }
}
