//! Per-run training settings.

use crate::error::{PerceptronError, Result};

/// Settings for one training run.
///
/// The learning rate and threshold are not here: they are fixed constants of
/// the engine.
///
/// ```
/// use perceptron_learning::TrainingConfig;
///
/// let config = TrainingConfig::default().with_bias(false).with_max_epochs(3);
/// assert!(!config.use_bias);
/// assert_eq!(config.max_epochs, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingConfig {
    /// Append a constant `1` coordinate to every vector before training.
    pub use_bias: bool,
    /// Upper bound on the number of sweeps over the training set.
    pub max_epochs: usize,
}

impl TrainingConfig {
    pub const DEFAULT_MAX_EPOCHS: usize = 1000;

    pub fn new(use_bias: bool, max_epochs: usize) -> Self {
        TrainingConfig { use_bias, max_epochs }
    }

    pub fn with_bias(mut self, use_bias: bool) -> Self {
        self.use_bias = use_bias;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_epochs == 0 {
            return Err(PerceptronError::InvalidEpochBudget);
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            use_bias: true,
            max_epochs: Self::DEFAULT_MAX_EPOCHS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrainingConfig::default();
        assert!(config.use_bias);
        assert_eq!(config.max_epochs, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_epochs_rejected() {
        let config = TrainingConfig::new(false, 0);
        assert_eq!(config.validate(), Err(PerceptronError::InvalidEpochBudget));
    }
}
