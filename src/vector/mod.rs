//! Integer vector arithmetic the perceptron is built on.

pub mod builder;
pub mod int_vector;

pub use builder::VectorBuilder;
pub use int_vector::{IntVector, Vector};

use std::fmt::Display;

/// Renders a list of vectors as `[(1,0), (0,1)]`.
pub fn render_list<T: Display>(vectors: &[Vector<T>]) -> String {
    let items: Vec<String> = vectors.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
