use serde::{Serialize, Deserialize};

/// Target label for one example.
///
/// A network configuration commits to exactly one representation: `Class`
/// under the softmax output policy, `Vector` under squared error. Handing a
/// network the other kind is a `ShapeMismatch` error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Target {
    /// Index of the correct class in `[0, output_size)`.
    Class(usize),
    /// Full target vector of length `output_size`.
    Vector(Vec<f64>),
}

/// A single training example: an input feature vector paired with a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    input: Vec<f64>,
    target: Target,
}

impl Example {
    /// Classification example with a target class index.
    pub fn with_class(input: Vec<f64>, class: usize) -> Example {
        Example { input, target: Target::Class(class) }
    }

    /// Regression-style example with a full target vector.
    pub fn with_target(input: Vec<f64>, target: Vec<f64>) -> Example {
        Example { input, target: Target::Vector(target) }
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}
