//! Single-layer perceptron over integer-coordinate vectors.
//!
//! Train a binary linear classifier from positive and negative examples and
//! classify query vectors with the learned weights:
//!
//! ```
//! use perceptron_learning::{IntVector, PerceptronEngine, TrainingConfig};
//!
//! let positive = IntVector::list_of(&[[2, 1], [2, 3], [3, -1], [3, 2]]);
//! let negative = IntVector::list_of(&[[0, -2], [1, 0], [2, -1], [3, -3]]);
//!
//! let engine = PerceptronEngine::new();
//! let report = engine.train(&positive, &negative, &TrainingConfig::default()).unwrap();
//! assert!(report.is_converged());
//!
//! let labels = report.classify(&IntVector::list_of(&[[3, 2], [1, 0]])).unwrap();
//! assert_eq!(perceptron_learning::common_types::render_labels(&labels), "+-");
//! ```

pub mod common_types;
pub mod config;
pub mod error;
pub mod perceptron;
pub mod vector;

#[cfg(feature = "python")]
mod python;

pub use common_types::{Label, TrainingOutcome};
pub use config::TrainingConfig;
pub use error::{PerceptronError, Result};
pub use perceptron::{PerceptronEngine, TrainingReport};
pub use vector::{IntVector, Vector, VectorBuilder};
