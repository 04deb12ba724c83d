//! Training engine and the report it produces.
pub mod engine;
pub mod report;

pub use engine::PerceptronEngine;
pub use report::TrainingReport;
