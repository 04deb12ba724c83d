//! Result of a training run and classification with its final weights.

use crate::common_types::{Label, TrainingOutcome};
use crate::error::Result;
use crate::perceptron::engine::PerceptronEngine;
use crate::vector::Vector;
use num_traits::{PrimInt, Signed};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingReport<T> {
    outcome: TrainingOutcome,
    weights: Vector<T>,
    bias_applied: bool,
}

impl<T> TrainingReport<T>
where
    T: PrimInt + Signed + Display,
{
    pub(crate) fn new(outcome: TrainingOutcome, weights: Vector<T>, bias_applied: bool) -> Self {
        TrainingReport { outcome, weights, bias_applied }
    }

    pub fn outcome(&self) -> TrainingOutcome {
        self.outcome
    }

    pub fn is_converged(&self) -> bool {
        self.outcome.is_converged()
    }

    /// Final weight vector, including the bias coordinate when one was used.
    pub fn weights(&self) -> &Vector<T> {
        &self.weights
    }

    pub fn bias_applied(&self) -> bool {
        self.bias_applied
    }

    /// Classifies `queries` in order with the final weights.
    ///
    /// Queries get the same bias augmentation the training set got. Works for
    /// non-converged runs too, using whatever weights the last epoch left.
    pub fn classify(&self, queries: &[Vector<T>]) -> Result<Vec<Label>> {
        let engine = PerceptronEngine::<T>::new();
        let augmented;
        let queries = if self.bias_applied {
            augmented = engine.bias_augment(queries);
            &augmented[..]
        } else {
            queries
        };
        queries
            .iter()
            .map(|q| engine.predict(q, &self.weights).map(Label::from))
            .collect()
    }
}
