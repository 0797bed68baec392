use serde::{Serialize, Deserialize};

/// Selects how the output layer and its loss are computed.
///
/// - `Softmax`: softmax output distribution with cross-entropy loss;
///   examples carry a target class index.
/// - `SquaredError`: the hidden nonlinearity is applied at the output layer
///   and the reported loss is the mean absolute error; examples carry a full
///   target vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputPolicy {
    Softmax,
    SquaredError,
}
