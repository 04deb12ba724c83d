//! Single-layer perceptron: weight update rule, epoch loop and query classification.

use crate::common_types::{render_labels, Label, TrainingOutcome};
use crate::config::TrainingConfig;
use crate::error::{PerceptronError, Result};
use crate::perceptron::report::TrainingReport;
use crate::vector::{Vector, VectorBuilder};
use num_traits::{PrimInt, Signed};
use std::fmt::{self, Display};
use std::marker::PhantomData;
use tracing::{debug, info, trace};

/// Trains a binary linear classifier over integer vectors.
///
/// The weight vector starts at all ones and is corrected on every
/// misclassified example by `w[i] += learning_rate * (actual - predicted) * x[i]`.
/// An example is positive iff `x · w > threshold`; a score of exactly the
/// threshold is negative. Examples are swept positives first, then negatives,
/// until one whole sweep leaves the weights unchanged or the epoch budget runs out.
pub struct PerceptronEngine<T> {
    _coordinate: PhantomData<T>,
}

impl<T> PerceptronEngine<T>
where
    T: PrimInt + Signed + Display,
{
    pub fn new() -> Self {
        PerceptronEngine { _coordinate: PhantomData }
    }

    /// Fixed learning rate of 1.
    pub fn learning_rate(&self) -> T {
        T::one()
    }

    /// Fixed classification threshold of 0.
    pub fn threshold(&self) -> T {
        T::zero()
    }

    /// All-ones weight vector of the given dimension.
    pub fn initialize_weights(&self, dimension: usize) -> Vector<T> {
        let mut builder = VectorBuilder::with_capacity(dimension);
        for _ in 0..dimension {
            builder.push(T::one());
        }
        builder.build()
    }

    /// `true` iff `item · weights` is strictly greater than the threshold.
    pub fn predict(&self, item: &Vector<T>, weights: &Vector<T>) -> Result<bool> {
        Ok(item.dot_product(weights)? > self.threshold())
    }

    /// Returns copies of `vectors`, each with a trailing `1` coordinate.
    pub fn bias_augment(&self, vectors: &[Vector<T>]) -> Vec<Vector<T>> {
        vectors.iter().cloned().map(|v| v.append(T::one())).collect()
    }

    /// Applies the perceptron correction for one example.
    ///
    /// With `predicted == actual` the result equals `weights` coordinate for coordinate.
    pub fn modify_weights(
        &self,
        item: &Vector<T>,
        weights: &Vector<T>,
        predicted: Label,
        actual: Label,
    ) -> Result<Vector<T>> {
        if item.size() != weights.size() {
            return Err(PerceptronError::DimensionMismatch {
                left: item.size(),
                right: weights.size(),
            });
        }
        // -1, 0 or +1 times the learning rate
        let delta = self.learning_rate() * (actual.as_int::<T>() - predicted.as_int::<T>());
        let mut builder = VectorBuilder::with_capacity(item.size());
        for (x, w) in item.iter().zip(weights.iter()) {
            builder.push(w + delta * x);
        }
        Ok(builder.build())
    }

    /// Classifies `item` with the current weights and corrects them on a miss.
    ///
    /// Hands `weights` back untouched when the prediction matches `label`.
    pub fn train_step(&self, item: &Vector<T>, label: Label, weights: Vector<T>) -> Result<Vector<T>> {
        let predicted = Label::from(self.predict(item, &weights)?);
        if predicted == label {
            return Ok(weights);
        }
        let corrected = self.modify_weights(item, &weights, predicted, label)?;
        trace!(item = %item, weights = %corrected, "corrected weights");
        Ok(corrected)
    }

    /// Runs the epoch loop and returns the outcome together with the final weights.
    pub fn train(
        &self,
        positive: &[Vector<T>],
        negative: &[Vector<T>],
        config: &TrainingConfig,
    ) -> Result<TrainingReport<T>> {
        config.validate()?;
        let mut dimension = positive.first().ok_or(PerceptronError::EmptyTrainingSet)?.size();

        let (positive, negative) = if config.use_bias {
            dimension += 1;
            (self.bias_augment(positive), self.bias_augment(negative))
        } else {
            (positive.to_vec(), negative.to_vec())
        };

        let mut weights = self.initialize_weights(dimension);
        let epoch_length = positive.len() + negative.len();
        let examples: Vec<(&Vector<T>, Label)> = positive
            .iter()
            .map(|v| (v, Label::Positive))
            .chain(negative.iter().map(|v| (v, Label::Negative)))
            .collect();

        let mut correct_count = 0;
        let mut epoch = 0;
        while epoch < config.max_epochs {
            correct_count = 0;
            for &(item, label) in &examples {
                let snapshot = weights.clone();
                weights = self.train_step(item, label, weights)?;
                // Compared by value: a correction with a zero item leaves the coordinates as they were
                if weights == snapshot {
                    correct_count += 1;
                }
            }
            debug!(epoch, correct_count, epoch_length, "finished epoch");
            // A clean sweep ends training; `epoch` stays at the converging sweep's index
            if correct_count >= epoch_length {
                break;
            }
            epoch += 1;
        }

        // Exhausted runs report the loop counter, converged runs the number of sweeps
        let outcome = if correct_count != epoch_length {
            info!(epoch, max_epochs = config.max_epochs, "perceptron did not converge");
            TrainingOutcome::Exhausted { epoch }
        } else {
            info!(epochs = epoch + 1, weights = %weights, "perceptron converged");
            TrainingOutcome::Converged { epochs: epoch + 1 }
        };

        Ok(TrainingReport::new(outcome, weights, config.use_bias))
    }

    /// Trains on `positive`/`negative` and classifies `queries` with the result.
    ///
    /// Returns `"<epoch>"` when training ran out of epochs, otherwise
    /// `"<epochs> <labels>"` with one `+`/`-` per query in input order.
    ///
    /// ```
    /// use perceptron_learning::{IntVector, PerceptronEngine};
    ///
    /// let positive = IntVector::list_of(&[[2, 1], [2, 3], [3, -1], [3, 2]]);
    /// let negative = IntVector::list_of(&[[0, -2], [1, 0], [2, -1], [3, -3]]);
    /// let queries = IntVector::list_of(&[[0, -2], [3, 2]]);
    ///
    /// let engine = PerceptronEngine::new();
    /// let result = engine.execute(&positive, &negative, true, 1000, &queries).unwrap();
    /// assert_eq!(result, "4 -+");
    /// ```
    pub fn execute(
        &self,
        positive: &[Vector<T>],
        negative: &[Vector<T>],
        use_bias: bool,
        max_epochs: usize,
        queries: &[Vector<T>],
    ) -> Result<String> {
        let config = TrainingConfig::new(use_bias, max_epochs);
        let report = self.train(positive, negative, &config)?;
        match report.outcome() {
            TrainingOutcome::Exhausted { epoch } => Ok(epoch.to_string()),
            TrainingOutcome::Converged { epochs } => {
                let labels = report.classify(queries)?;
                Ok(format!("{} {}", epochs, render_labels(&labels)))
            }
        }
    }
}

impl<T> Default for PerceptronEngine<T>
where
    T: PrimInt + Signed + Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PerceptronEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerceptronEngine").finish()
    }
}

impl<T> Clone for PerceptronEngine<T> {
    fn clone(&self) -> Self {
        PerceptronEngine { _coordinate: PhantomData }
    }
}

impl<T> Copy for PerceptronEngine<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::IntVector;

    fn engine() -> PerceptronEngine<i64> {
        PerceptronEngine::new()
    }

    #[test]
    fn test_constants() {
        assert_eq!(engine().learning_rate(), 1);
        assert_eq!(engine().threshold(), 0);
    }

    #[test]
    fn test_initialize_weights() {
        assert_eq!(engine().initialize_weights(3), IntVector::of(&[1, 1, 1]));
        assert!(engine().initialize_weights(0).is_empty());
    }

    #[test]
    fn test_predict_boundary_is_negative() {
        let weights = IntVector::of(&[1, 1]);
        assert_eq!(engine().predict(&IntVector::of(&[1, -1]), &weights), Ok(false));
        assert_eq!(engine().predict(&IntVector::of(&[1, 0]), &weights), Ok(true));
        assert_eq!(engine().predict(&IntVector::of(&[-1, 0]), &weights), Ok(false));
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let result = engine().predict(&IntVector::of(&[1, 2, 3]), &IntVector::of(&[1, 1]));
        assert!(matches!(result, Err(PerceptronError::DimensionMismatch { left: 3, right: 2 })));
    }

    #[test]
    fn test_bias_augment_leaves_input_alone() {
        let input = IntVector::list_of(&[[2, 1], [0, -2]]);
        let augmented = engine().bias_augment(&input);
        assert_eq!(augmented, IntVector::list_of(&[[2, 1, 1], [0, -2, 1]]));
        assert_eq!(input[0].size(), 2);
    }

    #[test]
    fn test_modify_weights_direction() {
        let item = IntVector::of(&[2, -1, 1]);
        let weights = IntVector::of(&[1, 1, 1]);
        // missed a positive: move towards the item
        let up = engine()
            .modify_weights(&item, &weights, Label::Negative, Label::Positive)
            .unwrap();
        assert_eq!(up, IntVector::of(&[3, 0, 2]));
        // missed a negative: move away from the item
        let down = engine()
            .modify_weights(&item, &weights, Label::Positive, Label::Negative)
            .unwrap();
        assert_eq!(down, IntVector::of(&[-1, 2, 0]));
    }

    #[test]
    fn test_modify_weights_no_change_when_correct() {
        let item = IntVector::of(&[5, -7]);
        let weights = IntVector::of(&[3, 4]);
        for label in [Label::Positive, Label::Negative] {
            let same = engine().modify_weights(&item, &weights, label, label).unwrap();
            assert_eq!(same, weights);
        }
    }

    #[test]
    fn test_train_step_keeps_weights_on_correct_prediction() {
        let weights = IntVector::of(&[1, 1]);
        let next = engine()
            .train_step(&IntVector::of(&[2, 1]), Label::Positive, weights.clone())
            .unwrap();
        assert_eq!(next, weights);
    }

    #[test]
    fn test_train_step_corrects_on_miss() {
        let next = engine()
            .train_step(&IntVector::of(&[2, 1]), Label::Negative, IntVector::of(&[1, 1]))
            .unwrap();
        assert_eq!(next, IntVector::of(&[-1, 0]));
    }

    #[test]
    fn test_train_rejects_empty_positive_set() {
        let negative = IntVector::list_of(&[[1, 0]]);
        let result = engine().train(&[], &negative, &TrainingConfig::default());
        assert!(matches!(result, Err(PerceptronError::EmptyTrainingSet)));
    }

    #[test]
    fn test_train_rejects_zero_epochs() {
        let positive = IntVector::list_of(&[[1, 0]]);
        let result = engine().train(&positive, &[], &TrainingConfig::new(false, 0));
        assert!(matches!(result, Err(PerceptronError::InvalidEpochBudget)));
    }

    #[test]
    fn test_train_already_separated_converges_in_one_epoch() {
        // initial all-ones weights classify both sets correctly
        let positive = IntVector::list_of(&[[1, 1], [2, 0]]);
        let negative = IntVector::list_of(&[[-1, -1], [0, -3]]);
        let report = engine()
            .train(&positive, &negative, &TrainingConfig::new(false, 10))
            .unwrap();
        assert_eq!(report.outcome(), TrainingOutcome::Converged { epochs: 1 });
        assert_eq!(report.weights(), &IntVector::of(&[1, 1]));
    }

    #[test]
    fn test_train_mismatched_negative_dimension() {
        let positive = IntVector::list_of(&[[1, 1]]);
        let negative = IntVector::list_of(&[[1, 1, 1]]);
        let result = engine().train(&positive, &negative, &TrainingConfig::new(false, 5));
        assert!(matches!(result, Err(PerceptronError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_execute_exhausted_reports_loop_counter() {
        // a point that is both positive and negative can never be separated
        let positive = IntVector::list_of(&[[1, 1]]);
        let negative = IntVector::list_of(&[[1, 1]]);
        let result = engine().execute(&positive, &negative, true, 7, &[]).unwrap();
        assert_eq!(result, "7");
    }

    #[test]
    fn test_zero_item_correction_counts_as_unchanged() {
        // (0,0) scores 0 and is predicted negative, but the correction adds nothing
        let zero = IntVector::list_of(&[[0, 0]]);
        let result = engine().execute(&zero, &[], false, 3, &zero).unwrap();
        assert_eq!(result, "1 -");
    }

    #[test]
    fn test_execute_without_queries() {
        let positive = IntVector::list_of(&[[1, 1]]);
        let result = engine().execute(&positive, &[], false, 5, &[]).unwrap();
        assert_eq!(result, "1 ");
    }
}
