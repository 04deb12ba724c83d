//! Python bindings, enabled with the `python` feature.

use crate::config::TrainingConfig;
use crate::error::PerceptronError;
use crate::perceptron::{PerceptronEngine, TrainingReport};
use crate::vector::IntVector;
use pyo3::prelude::*;

impl From<PerceptronError> for PyErr {
    fn from(err: PerceptronError) -> Self {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }
}

fn to_vectors(rows: Vec<Vec<i64>>) -> Vec<IntVector> {
    rows.into_iter().map(IntVector::from).collect()
}

/// Trains on `positive`/`negative` and classifies `queries`, returning the
/// same string the Rust `PerceptronEngine::execute` produces.
#[pyfunction]
#[pyo3(signature = (positive, negative, use_bias, max_epochs, queries))]
fn execute(
    positive: Vec<Vec<i64>>,
    negative: Vec<Vec<i64>>,
    use_bias: bool,
    max_epochs: usize,
    queries: Vec<Vec<i64>>,
) -> PyResult<String> {
    let engine = PerceptronEngine::new();
    Ok(engine.execute(
        &to_vectors(positive),
        &to_vectors(negative),
        use_bias,
        max_epochs,
        &to_vectors(queries),
    )?)
}

#[pyclass(name = "Perceptron")]
struct PyPerceptron {
    config: TrainingConfig,
    report: Option<TrainingReport<i64>>, // Populated by fit()
}

#[pymethods]
impl PyPerceptron {
    #[new]
    #[pyo3(signature = (use_bias = true, max_epochs = TrainingConfig::DEFAULT_MAX_EPOCHS))]
    fn new(use_bias: bool, max_epochs: usize) -> PyResult<Self> {
        let config = TrainingConfig::new(use_bias, max_epochs);
        config.validate()?;
        Ok(PyPerceptron { config, report: None })
    }

    fn fit(&mut self, positive: Vec<Vec<i64>>, negative: Vec<Vec<i64>>) -> PyResult<()> {
        let engine = PerceptronEngine::new();
        let report = engine.train(&to_vectors(positive), &to_vectors(negative), &self.config)?;
        self.report = Some(report);
        Ok(())
    }

    fn predict(&self, queries: Vec<Vec<i64>>) -> PyResult<Vec<bool>> {
        let report = self.fitted()?;
        let labels = report.classify(&to_vectors(queries))?;
        Ok(labels.into_iter().map(|l| l.is_positive()).collect())
    }

    #[getter]
    fn converged(&self) -> PyResult<bool> {
        Ok(self.fitted()?.is_converged())
    }

    #[getter]
    fn epochs(&self) -> PyResult<usize> {
        Ok(self.fitted()?.outcome().epochs())
    }

    #[getter]
    fn weights(&self) -> PyResult<Vec<i64>> {
        Ok(self.fitted()?.weights().coordinates().to_vec())
    }
}

impl PyPerceptron {
    fn fitted(&self) -> PyResult<&TrainingReport<i64>> {
        self.report.as_ref().ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>("Perceptron has not been fitted. Call fit() first.")
        })
    }
}

/// The name of this function must match `lib.name` in `Cargo.toml`.
#[pymodule]
fn perceptron_learning(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(execute, m)?)?;
    m.add_class::<PyPerceptron>()?;
    Ok(())
}
