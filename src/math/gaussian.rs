use rand::Rng;
use std::f64::consts::PI;

/// Standard-normal sampler using the Box-Muller transform.
///
/// Each pair of uniform draws yields two independent N(0, 1) samples; the
/// second is cached and handed out on the next call, so the generator
/// alternates between a fresh pair and the cached spare.
#[derive(Debug, Default)]
pub struct Gaussian {
    spare: Option<f64>,
}

impl Gaussian {
    pub fn new() -> Gaussian {
        Gaussian { spare: None }
    }

    /// Draws one N(0, 1) sample.
    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // Both uniforms in (0, 1] to avoid ln(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();

        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = 2.0 * PI * u2;

        self.spare = Some(radius * angle.sin());
        radius * angle.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_are_deterministic_for_a_fixed_seed() {
        let mut a = Gaussian::new();
        let mut b = Gaussian::new();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        for _ in 0..16 {
            assert_eq!(a.sample(&mut rng_a), b.sample(&mut rng_b));
        }
    }

    #[test]
    fn sample_moments_approach_standard_normal() {
        let mut gaussian = Gaussian::new();
        let mut rng = StdRng::seed_from_u64(42);

        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| gaussian.sample(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.05, "mean {mean} too far from 0");
        assert!((variance - 1.0).abs() < 0.1, "variance {variance} too far from 1");
    }

    #[test]
    fn all_samples_are_finite() {
        let mut gaussian = Gaussian::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(gaussian.sample(&mut rng).is_finite());
        }
    }
}
