use std::fmt;

/// Errors reported at the network boundary.
///
/// Matrix-level index bounds and vector-length preconditions are caller
/// contracts and panic instead; see `math::matrix`.
#[derive(Debug, Clone)]
pub enum Error {
    /// An input or target vector has the wrong length for the network, or a
    /// target representation does not match the configured output policy.
    ShapeMismatch(String),
    /// A hyperparameter or constructor argument is outside its valid range.
    InvalidConfiguration(String),
    /// A computed loss is not finite (e.g. a zero softmax probability fed
    /// into the logarithm).
    NumericInstability(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch(msg) => write!(f, "shape mismatch: {msg}"),
            Error::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Error::NumericInstability(msg) => write!(f, "numeric instability: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
