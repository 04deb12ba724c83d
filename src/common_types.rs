//! This module contains the small value types shared by training and classification.

use std::fmt;

/// Binary class of a training example or query.
///
/// Training examples carry no label of their own; the label comes from
/// which input list (positive or negative) they were supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// `1` for positive, `0` for negative, as used by the weight update rule.
    pub fn as_int<T: num_traits::PrimInt>(self) -> T {
        match self {
            Label::Positive => T::one(),
            Label::Negative => T::zero(),
        }
    }

    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }

    pub fn symbol(self) -> char {
        match self {
            Label::Positive => '+',
            Label::Negative => '-',
        }
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive { Label::Positive } else { Label::Negative }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders a run of labels with no separator, e.g. `----++++`.
pub fn render_labels(labels: &[Label]) -> String {
    labels.iter().map(|l| l.symbol()).collect()
}

/// How a training run ended.
///
/// The two variants count epochs differently: `Converged` reports the number
/// of sweeps actually run, `Exhausted` reports the raw loop counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainingOutcome {
    Converged { epochs: usize },
    Exhausted { epoch: usize },
}

impl TrainingOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, TrainingOutcome::Converged { .. })
    }

    /// The epoch figure this outcome reports.
    pub fn epochs(&self) -> usize {
        match *self {
            TrainingOutcome::Converged { epochs } => epochs,
            TrainingOutcome::Exhausted { epoch } => epoch,
        }
    }
}

impl fmt::Display for TrainingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.epochs())
    }
}
