//! A small dense feed-forward regressor.
//!
//! Architecture is fixed-shape: `n_inputs → hidden (ReLU) → 1 (identity)`,
//! trained with online SGD on mean-squared error and reported with mean
//! absolute error, the metric the hysteresis pipeline's evaluation uses.
//! Weight initialization is uniform in ±0.05 from a seeded RNG, so the same
//! seed rebuilds the same network.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

const INIT_LIMIT: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Activation {
    ReLU,
    Identity,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::ReLU => if x > 0.0 { x } else { 0.0 },
            Activation::Identity => x,
        }
    }

    fn derivative(self, x: f64) -> f64 {
        match self {
            Activation::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            Activation::Identity => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DenseLayer {
    weights: Matrix,
    biases: Matrix,
    activation: Activation,
}

impl DenseLayer {
    fn new(input_size: usize, size: usize, activation: Activation, rng: &mut StdRng) -> DenseLayer {
        DenseLayer {
            weights: Matrix::uniform(input_size, size, INIT_LIMIT, rng),
            biases: Matrix::uniform(1, size, INIT_LIMIT, rng),
            activation,
        }
    }

    /// Returns (pre-activation z, activation a) for a 1×n input row.
    fn forward(&self, input: &Matrix) -> (Matrix, Matrix) {
        let z = input.clone() * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activation.apply(x));
        (z, a)
    }
}

/// Training hyperparameters for [`Regressor::fit`].
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Fraction of the training rows held out (from the end) for per-epoch
    /// validation MAE.  Zero disables validation.
    pub validation_fraction: f64,
    /// Seed for the per-epoch sample shuffle.
    pub shuffle_seed: u64,
}

impl Default for FitConfig {
    fn default() -> Self {
        FitConfig {
            epochs: 600,
            learning_rate: 0.01,
            validation_fraction: 0.2,
            shuffle_seed: 0,
        }
    }
}

/// Per-epoch training statistics returned by [`Regressor::fit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochRecord {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Mean squared error over the epoch's training samples.
    pub train_loss: f64,
    /// Mean absolute error over the training rows after the epoch.
    pub train_mae: f64,
    /// Mean absolute error over the held-out rows, if any.
    pub val_mae: Option<f64>,
}

/// Dense regression network predicting one scalar per feature row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regressor {
    layers: Vec<DenseLayer>,
}

impl Regressor {
    /// Builds `n_inputs → hidden (ReLU) → 1 (identity)` with seeded uniform
    /// initialization.
    pub fn new(n_inputs: usize, hidden: usize, seed: u64) -> Regressor {
        let mut rng = StdRng::seed_from_u64(seed);
        let layers = vec![
            DenseLayer::new(n_inputs, hidden, Activation::ReLU, &mut rng),
            DenseLayer::new(hidden, 1, Activation::Identity, &mut rng),
        ];
        Regressor { layers }
    }

    pub fn predict_one(&self, input: &[f64]) -> f64 {
        let mut current = Matrix::from_rows(vec![input.to_vec()]);
        for layer in &self.layers {
            let (_, a) = layer.forward(&current);
            current = a;
        }
        current.data[0][0]
    }

    pub fn predict(&self, features: &Matrix) -> Vec<f64> {
        features.data.iter().map(|row| self.predict_one(row)).collect()
    }

    /// Trains with online SGD and returns the per-epoch history.
    ///
    /// # Panics
    /// Panics if `features` and `targets` disagree on length or the
    /// validation fraction leaves no training rows.
    pub fn fit(&mut self, features: &Matrix, targets: &[f64], config: &FitConfig) -> Vec<EpochRecord> {
        assert_eq!(features.rows, targets.len(), "features/targets length mismatch");

        // Hold the tail rows out for validation; the caller's split is
        // already shuffled so the tail is not biased.
        let n = features.rows;
        let n_val = (n as f64 * config.validation_fraction).round() as usize;
        let n_train = n - n_val;
        assert!(n_train > 0, "validation fraction leaves no training rows");

        let mut rng = StdRng::seed_from_u64(config.shuffle_seed);
        let mut history = Vec::with_capacity(config.epochs);

        for epoch in 1..=config.epochs {
            let mut indices: Vec<usize> = (0..n_train).collect();
            indices.shuffle(&mut rng);

            let mut total_loss = 0.0;
            for &i in &indices {
                total_loss += self.train_sample(features.row(i), targets[i], config.learning_rate);
            }
            let train_loss = total_loss / n_train as f64;

            let train_mae = self.mae(features, targets, 0, n_train);
            let val_mae = if n_val > 0 {
                Some(self.mae(features, targets, n_train, n))
            } else {
                None
            };

            debug!(
                "epoch {}/{}: loss {:.6} mae {:.6} val_mae {:?}",
                epoch, config.epochs, train_loss, train_mae, val_mae
            );

            history.push(EpochRecord { epoch, train_loss, train_mae, val_mae });
        }

        history
    }

    /// One forward/backward pass on a single sample; returns the squared error.
    fn train_sample(&mut self, input: &[f64], target: f64, lr: f64) -> f64 {
        // Forward pass, caching pre-activations and activations per layer.
        let mut activations = vec![Matrix::from_rows(vec![input.to_vec()])];
        let mut pre_activations = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            let (z, a) = layer.forward(activations.last().unwrap());
            pre_activations.push(z);
            activations.push(a);
        }

        let prediction = activations.last().unwrap().data[0][0];
        let error = prediction - target;

        // Backward pass: delta starts as dL/da of the output (MSE gradient).
        let mut delta = Matrix::from_rows(vec![vec![error]]);
        for i in (0..self.layers.len()).rev() {
            let act_derivative =
                pre_activations[i].map(|x| self.layers[i].activation.derivative(x));
            let layer_delta = delta.hadamard(&act_derivative);

            let w_grad = activations[i].transpose() * layer_delta.clone();
            let b_grad = layer_delta.clone();

            if i > 0 {
                delta = layer_delta * self.layers[i].weights.transpose();
            }

            let layer = &mut self.layers[i];
            layer.weights = layer.weights.clone() - w_grad.map(|x| x * lr);
            layer.biases = layer.biases.clone() - b_grad.map(|x| x * lr);
        }

        error * error
    }

    /// Mean absolute error over rows `start..end`.
    fn mae(&self, features: &Matrix, targets: &[f64], start: usize, end: usize) -> f64 {
        let total: f64 = (start..end)
            .map(|i| (self.predict_one(features.row(i)) - targets[i]).abs())
            .sum();
        total / (end - start) as f64
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Regressor> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_toy(n: usize) -> (Matrix, Vec<f64>) {
        // y = 2x - 0.5 over [0, 1]
        let rows: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64 / n as f64]).collect();
        let targets = rows.iter().map(|r| 2.0 * r[0] - 0.5).collect();
        (Matrix::from_rows(rows), targets)
    }

    #[test]
    fn same_seed_builds_same_network() {
        let a = Regressor::new(4, 8, 42);
        let b = Regressor::new(4, 8, 42);
        let x = [0.1, -0.2, 0.3, -0.4];
        assert_eq!(a.predict_one(&x), b.predict_one(&x));
    }

    #[test]
    fn fit_reduces_training_loss() {
        let (x, y) = linear_toy(32);
        let mut net = Regressor::new(1, 8, 1);
        let config = FitConfig {
            epochs: 200,
            learning_rate: 0.05,
            validation_fraction: 0.0,
            shuffle_seed: 3,
        };
        let history = net.fit(&x, &y, &config);
        assert_eq!(history.len(), 200);
        assert!(history.last().unwrap().train_loss < history[0].train_loss);
        assert!(history.last().unwrap().val_mae.is_none());
    }

    #[test]
    fn validation_split_reports_val_mae() {
        let (x, y) = linear_toy(20);
        let mut net = Regressor::new(1, 4, 2);
        let config = FitConfig {
            epochs: 5,
            learning_rate: 0.01,
            validation_fraction: 0.2,
            shuffle_seed: 0,
        };
        let history = net.fit(&x, &y, &config);
        assert!(history.iter().all(|r| r.val_mae.is_some()));
    }

    #[test]
    fn predict_returns_one_value_per_row() {
        let net = Regressor::new(3, 4, 0);
        let m = Matrix::zeros(7, 3);
        assert_eq!(net.predict(&m).len(), 7);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let path = path.to_str().unwrap();

        let net = Regressor::new(2, 4, 5);
        net.save_json(path).unwrap();
        let loaded = Regressor::load_json(path).unwrap();

        let x = [0.3, -0.7];
        assert_eq!(net.predict_one(&x), loaded.predict_one(&x));
    }
}
