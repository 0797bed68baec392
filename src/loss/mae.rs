pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|predicted - expected|).
    ///
    /// This is the per-example metric reported by `learn` under the
    /// squared-error output policy; the training delta itself comes from the
    /// activation derivative in the backward pass.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mae_averages_absolute_differences() {
        let loss = MaeLoss::loss(&[1.0, 0.0], &[0.0, 0.5]);
        assert_relative_eq!(loss, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn mae_is_zero_on_exact_match() {
        assert_eq!(MaeLoss::loss(&[0.3, -0.2], &[0.3, -0.2]), 0.0);
    }
}
