/// Categorical cross-entropy loss for the softmax output policy.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Scalar loss: negative log of the probability assigned to the target
    /// class.
    ///
    /// No epsilon clamp: a probability of exactly zero yields `inf`, which
    /// the caller surfaces as a `NumericInstability` error.
    pub fn loss(probabilities: &[f64], class: usize) -> f64 {
        -probabilities[class].ln()
    }

    /// Gradient of the combined softmax + cross-entropy w.r.t. the
    /// pre-softmax logits: `predicted[i] - onehot(class)[i]`.
    ///
    /// This is the output-layer delta; the softmax Jacobian is already folded
    /// in, so the backward pass must not apply an activation derivative on
    /// top of it.
    pub fn output_delta(probabilities: &[f64], class: usize) -> Vec<f64> {
        probabilities.iter()
            .enumerate()
            .map(|(i, &p)| if i == class { p - 1.0 } else { p })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn loss_is_negative_log_probability() {
        let p = [0.2, 0.5, 0.3];
        assert_relative_eq!(CrossEntropyLoss::loss(&p, 1), -(0.5_f64.ln()), epsilon = 1e-12);
    }

    #[test]
    fn zero_probability_gives_infinite_loss() {
        let p = [0.0, 1.0];
        assert!(CrossEntropyLoss::loss(&p, 0).is_infinite());
    }

    #[test]
    fn output_delta_subtracts_one_hot() {
        let p = [0.25, 0.25, 0.5];
        let delta = CrossEntropyLoss::output_delta(&p, 2);
        assert_eq!(delta, vec![0.25, 0.25, -0.5]);
    }
}
