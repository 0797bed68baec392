use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::HiddenActivation;
use crate::error::{Error, Result};
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::mae::MaeLoss;
use crate::loss::output_policy::OutputPolicy;
use crate::math::gaussian::Gaussian;
use crate::math::matrix::Matrix;
use crate::network::example::{Example, Target};
use crate::train::report::TrainReport;

/// Weight initialization scheme used by `Network::init`.
///
/// Both draw with scale `1/sqrt(rows * cols)` per layer matrix. `Gaussian`
/// samples N(0, scale) and zeroes the bias row; `Uniform` draws `[0, scale)`
/// everywhere including the bias row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightInit {
    Uniform,
    Gaussian,
}

/// A feed-forward multilayer perceptron with per-example backpropagation and
/// a momentum + L2-decay + mini-batch parameter update.
///
/// Layer weight matrix `i` has shape `(sizes[i]+1, sizes[i+1])`; the extra
/// row is the bias row, multiplied against a constant 1 appended to the
/// incoming activation during the forward pass.
#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    sizes: Vec<usize>,
    weights: Vec<Matrix>,
    /// Momentum state, one matrix per layer, shaped like `weights`.
    gsum: Vec<Matrix>,
    /// Per-batch gradient sums, reset at every batch boundary.
    dw: Vec<Matrix>,
    activations: Vec<Vec<f64>>,
    deltas: Vec<Vec<f64>>,

    hidden_activation: HiddenActivation,
    output_policy: OutputPolicy,
    weight_init: WeightInit,

    learning_rate: f64,
    momentum: f64,
    l2_decay: f64,
    max_loss: f64,
    max_epochs: usize,
    batch_size: usize,
    shuffle: bool,
    verbose: bool,

    /// Running example counter; an update fires when it reaches a multiple
    /// of `batch_size`.
    examples_seen: usize,
}

impl Network {
    /// Allocates a network for the given layer sizes. Weights are zero until
    /// `init` is called.
    pub fn new(sizes: &[usize]) -> Result<Network> {
        if sizes.len() < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "at least two layer sizes are required, got {}",
                sizes.len()
            )));
        }
        if sizes.iter().any(|&s| s == 0) {
            return Err(Error::InvalidConfiguration(
                "layer sizes must be positive".to_owned(),
            ));
        }

        let weights: Vec<Matrix> = (0..sizes.len() - 1)
            .map(|i| Matrix::zeros(sizes[i] + 1, sizes[i + 1]))
            .collect();
        let gsum = weights.iter().map(|w| Matrix::zeros(w.rows(), w.cols())).collect();
        let dw = weights.iter().map(|w| Matrix::zeros(w.rows(), w.cols())).collect();

        let activations = sizes.iter().map(|&s| vec![0.0; s]).collect();
        let deltas = (1..sizes.len()).map(|i| vec![0.0; sizes[i]]).collect();

        Ok(Network {
            sizes: sizes.to_vec(),
            weights,
            gsum,
            dw,
            activations,
            deltas,
            hidden_activation: HiddenActivation::Tanh,
            output_policy: OutputPolicy::Softmax,
            weight_init: WeightInit::Gaussian,
            learning_rate: 0.01,
            momentum: 0.1,
            l2_decay: 0.001,
            max_loss: 1e-3,
            max_epochs: 1000,
            batch_size: 1,
            shuffle: true,
            verbose: false,
            examples_seen: 0,
        })
    }

    /// (Re)randomizes the weights and zeroes every accumulator and the
    /// example counter. Callable repeatedly to restart training.
    pub fn init<R: Rng>(&mut self, rng: &mut R) {
        let init = self.weight_init;
        let mut gaussian = Gaussian::new();

        for w in &mut self.weights {
            let scale = 1.0 / ((w.rows() * w.cols()) as f64).sqrt();
            let bias_row = w.rows() - 1;

            for i in 0..w.rows() {
                for j in 0..w.cols() {
                    let value = match init {
                        WeightInit::Gaussian if i == bias_row => 0.0,
                        WeightInit::Gaussian => gaussian.sample(rng) * scale,
                        WeightInit::Uniform => rng.gen::<f64>() * scale,
                    };
                    w.set(i, j, value);
                }
            }
        }

        for m in &mut self.gsum {
            m.fill(0.0);
        }
        for m in &mut self.dw {
            m.fill(0.0);
        }
        self.examples_seen = 0;
    }

    /// Forward pass. Returns a copy of the output activation; the network
    /// keeps its own copy for the backward pass.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.sizes[0] {
            return Err(Error::ShapeMismatch(format!(
                "input length {} does not match input layer size {}",
                input.len(),
                self.sizes[0]
            )));
        }

        self.activations[0].clear();
        self.activations[0].extend_from_slice(input);

        let boundaries = self.weights.len();
        for i in 0..boundaries {
            self.activations[i].push(1.0);
            let mut next = self.weights[i].multiply(&self.activations[i]);
            self.activations[i].pop();

            if i == boundaries - 1 && self.output_policy == OutputPolicy::Softmax {
                softmax_in_place(&mut next);
            } else {
                let activation = self.hidden_activation;
                for x in next.iter_mut() {
                    *x = activation.function(*x);
                }
            }

            self.activations[i + 1] = next;
        }

        Ok(self.activations[boundaries].clone())
    }

    /// Backward pass over the activations left by the last `forward` call.
    /// Accumulates the weight gradient into `dw` and leaves the per-layer
    /// deltas in place; does not touch the weights.
    fn backward(&mut self, target: &Target) -> Result<()> {
        let boundaries = self.weights.len();
        let output_size = self.sizes[boundaries];

        match (self.output_policy, target) {
            (OutputPolicy::Softmax, Target::Class(class)) => {
                if *class >= output_size {
                    return Err(Error::ShapeMismatch(format!(
                        "class index {class} out of range for output size {output_size}"
                    )));
                }
                self.deltas[boundaries - 1] =
                    CrossEntropyLoss::output_delta(&self.activations[boundaries], *class);
            }
            (OutputPolicy::SquaredError, Target::Vector(expected)) => {
                if expected.len() != output_size {
                    return Err(Error::ShapeMismatch(format!(
                        "target length {} does not match output size {output_size}",
                        expected.len()
                    )));
                }
                let activation = self.hidden_activation;
                self.deltas[boundaries - 1] = self.activations[boundaries]
                    .iter()
                    .zip(expected.iter())
                    .map(|(&a, &t)| activation.derivative(a) * (a - t))
                    .collect();
            }
            _ => {
                return Err(Error::ShapeMismatch(
                    "target representation does not match the output policy".to_owned(),
                ));
            }
        }

        for i in (0..boundaries).rev() {
            if i != boundaries - 1 {
                // Hidden boundary: fold in the activation derivative at a[i+1].
                let activation = self.hidden_activation;
                for (g, &a) in self.deltas[i].iter_mut().zip(self.activations[i + 1].iter()) {
                    *g *= activation.derivative(a);
                }
            }

            // Weight gradient: outer product of the bias-extended input
            // activation and the output-side delta.
            self.activations[i].push(1.0);
            let grad = Matrix::outer(&self.activations[i], &self.deltas[i]);
            self.activations[i].pop();
            self.dw[i] += &grad;

            if i > 0 {
                let mut prev = self.weights[i].multiply_transposed(&self.deltas[i]);
                // The bias entry has no upstream dependency.
                prev.pop();
                self.deltas[i - 1] = prev;
            }
        }

        Ok(())
    }

    /// Runs one example through forward + backward, returns its pre-update
    /// loss, and applies the accumulated batch update when the running
    /// counter reaches a multiple of `batch_size`.
    pub fn learn(&mut self, example: &Example) -> Result<f64> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfiguration(
                "batch size must be at least 1".to_owned(),
            ));
        }

        self.forward(example.input())?;
        self.backward(example.target())?;

        let output = &self.activations[self.sizes.len() - 1];
        let loss = match (self.output_policy, example.target()) {
            (OutputPolicy::Softmax, Target::Class(class)) => {
                CrossEntropyLoss::loss(output, *class)
            }
            (OutputPolicy::SquaredError, Target::Vector(expected)) => {
                MaeLoss::loss(output, expected)
            }
            _ => {
                return Err(Error::ShapeMismatch(
                    "target representation does not match the output policy".to_owned(),
                ));
            }
        };

        if !loss.is_finite() {
            return Err(Error::NumericInstability(format!(
                "non-finite loss {loss} for example"
            )));
        }

        self.examples_seen += 1;
        if self.examples_seen % self.batch_size == 0 {
            self.apply_update();
        }

        Ok(loss)
    }

    /// Applies the accumulated gradient:
    /// `gsum = momentum*gsum - learning_rate*(l2_decay*w + dw/batch_size)`,
    /// then `w += gsum`, then zeroes `dw`. L2 decay skips the bias row.
    fn apply_update(&mut self) {
        let learning_rate = self.learning_rate;
        let momentum = self.momentum;
        let l2_decay = self.l2_decay;
        let batch = self.batch_size as f64;

        for l in 0..self.weights.len() {
            let w = &mut self.weights[l];
            let gsum = &mut self.gsum[l];
            let dw = &mut self.dw[l];
            let bias_row = w.rows() - 1;

            for i in 0..w.rows() {
                for j in 0..w.cols() {
                    let decay = if i == bias_row { 0.0 } else { l2_decay * w.at(i, j) };
                    let step = momentum * gsum.at(i, j)
                        - learning_rate * (decay + dw.at(i, j) / batch);
                    gsum.set(i, j, step);
                    w.set(i, j, w.at(i, j) + step);
                }
            }

            dw.fill(0.0);
        }
    }

    /// Runs `learn` over the full example set for up to `max_epochs` rounds,
    /// visiting examples in a freshly shuffled order each epoch when the
    /// shuffle flag is set, and stops early once the worst per-example loss
    /// of an epoch drops to `max_loss` or below.
    pub fn train<R: Rng>(&mut self, examples: &[Example], rng: &mut R) -> Result<TrainReport> {
        if examples.is_empty() {
            return Err(Error::InvalidConfiguration(
                "example set must not be empty".to_owned(),
            ));
        }
        if self.batch_size == 0 {
            return Err(Error::InvalidConfiguration(
                "batch size must be at least 1".to_owned(),
            ));
        }
        if self.max_epochs == 0 {
            return Err(Error::InvalidConfiguration(
                "epoch budget must be at least 1".to_owned(),
            ));
        }

        let mut indices: Vec<usize> = (0..examples.len()).collect();
        let mut report = TrainReport {
            epochs: 0,
            max_loss: f64::INFINITY,
            converged: false,
        };

        for epoch in 1..=self.max_epochs {
            if self.shuffle {
                indices.shuffle(rng);
            }

            let mut worst: f64 = 0.0;
            for &idx in &indices {
                let loss = self.learn(&examples[idx])?;
                worst = worst.max(loss);
            }

            report.epochs = epoch;
            report.max_loss = worst;

            if self.verbose {
                println!("epoch {epoch}: max loss = {worst:.6}");
            }

            if worst <= self.max_loss {
                report.converged = true;
                break;
            }
        }

        Ok(report)
    }

    /// Inference only: index of the largest output entry, ties resolved by
    /// first occurrence. Does not touch the accumulators or the example
    /// counter. Regression-style callers use `forward` for the raw vector.
    pub fn predict(&mut self, input: &[f64]) -> Result<usize> {
        let output = self.forward(input)?;
        Ok(argmax(&output))
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn set_momentum(&mut self, momentum: f64) {
        self.momentum = momentum;
    }

    pub fn l2_decay(&self) -> f64 {
        self.l2_decay
    }

    pub fn set_l2_decay(&mut self, l2_decay: f64) {
        self.l2_decay = l2_decay;
    }

    pub fn max_loss(&self) -> f64 {
        self.max_loss
    }

    pub fn set_max_loss(&mut self, max_loss: f64) {
        self.max_loss = max_loss;
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn set_max_epochs(&mut self, max_epochs: usize) {
        self.max_epochs = max_epochs;
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size;
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn hidden_activation(&self) -> HiddenActivation {
        self.hidden_activation
    }

    pub fn set_hidden_activation(&mut self, activation: HiddenActivation) {
        self.hidden_activation = activation;
    }

    pub fn output_policy(&self) -> OutputPolicy {
        self.output_policy
    }

    pub fn set_output_policy(&mut self, policy: OutputPolicy) {
        self.output_policy = policy;
    }

    pub fn weight_init(&self) -> WeightInit {
        self.weight_init
    }

    pub fn set_weight_init(&mut self, init: WeightInit) {
        self.weight_init = init;
    }

    /// Serializes the full network state (sizes, weight and accumulator
    /// matrices in row-major order, hyperparameters, policy enums, example
    /// counter) to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

/// Numerically stable softmax: shift by the maximum, exponentiate, normalize.
/// Leaves every entry in (0, 1) with the entries summing to 1.
fn softmax_in_place(v: &mut [f64]) {
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for x in v.iter_mut() {
        *x = (*x - max).exp();
        sum += *x;
    }
    for x in v.iter_mut() {
        *x /= sum;
    }
}

/// Index of the maximum element; ties resolve to the first occurrence.
fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > v[best] {
            best = i;
        }
    }
    best
}
