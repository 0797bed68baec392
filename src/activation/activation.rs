use serde::{Serialize, Deserialize};

/// Nonlinearity applied to hidden-layer activations (and, under the
/// squared-error output policy, to the output layer as well).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenActivation {
    Tanh,
    Sigmoid,
}

impl HiddenActivation {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            HiddenActivation::Tanh => x.tanh(),
            HiddenActivation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Element-wise derivative, evaluated at the *activation value* `a`
    /// (not the pre-activation): `1 - a²` for tanh, `a(1 - a)` for sigmoid.
    ///
    /// The engine only retains post-activation buffers, so this is the form
    /// the backward pass needs.
    pub fn derivative(&self, a: f64) -> f64 {
        match self {
            HiddenActivation::Tanh => 1.0 - a * a,
            HiddenActivation::Sigmoid => a * (1.0 - a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tanh_derivative_matches_definition() {
        for &x in &[-2.0, -0.5, 0.0, 0.3, 1.7] {
            let a = HiddenActivation::Tanh.function(x);
            let expected = 1.0 - x.tanh() * x.tanh();
            assert_relative_eq!(HiddenActivation::Tanh.derivative(a), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn sigmoid_derivative_matches_definition() {
        for &x in &[-3.0, -1.0, 0.0, 0.5, 2.0] {
            let a = HiddenActivation::Sigmoid.function(x);
            let s = 1.0 / (1.0 + (-x).exp());
            assert_relative_eq!(
                HiddenActivation::Sigmoid.derivative(a),
                s * (1.0 - s),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn sigmoid_stays_in_unit_interval() {
        for &x in &[-50.0, -1.0, 0.0, 1.0, 50.0] {
            let a = HiddenActivation::Sigmoid.function(x);
            assert!((0.0..=1.0).contains(&a));
        }
    }
}
