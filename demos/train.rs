/// End-to-end hysteresis regression pipeline.
///
/// Pipeline:     build dataset → 80/20 split → standardize → fit → evaluate
/// Architecture: n_features → 300 (ReLU) → 1 (identity)
/// Loss:         MSE, reported as MAE in target units
/// Epochs:       600, lr = 0.01, validation fraction 0.2
///
/// Run with:
///   cargo run --example train --release -- <sample-dir> [target-index]
///
/// `target-index` selects which of the six parameters to predict (0-5,
/// default 0 = mean anisotropy constant).  Artifacts written to the working
/// directory: `interpolation.txt` (trace sample), `epochs.txt` (per-epoch
/// MAE), `predictions.txt` (actual vs. predicted), `model.json`.

use std::error::Error;
use std::fs::File;
use std::io::Write;

use hysteresis_nn::{
    train_test_split, DatasetBuilder, FitConfig, Regressor, StandardScaler, TargetParameter,
};

const N_FEATURES: usize = 101;
const SPLIT_SEED: u64 = 14264;
const NOISE_SEED: u64 = 42;
const TRACE_SAMPLE: &str = "96.2_2.36_8.43_4.63_5.32_2.17.txt";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let dir = args.next().unwrap_or_else(|| "dataset_random".to_string());
    let target_index: usize = match args.next() {
        Some(s) => s.parse()?,
        None => 0,
    };
    let target = TargetParameter::from_index(target_index)
        .ok_or_else(|| format!("target index {} out of range (0-5)", target_index))?;

    // --- Build the dataset ---
    let dataset = DatasetBuilder::new(&dir, N_FEATURES, target)
        .with_seed(NOISE_SEED)
        .with_trace(TRACE_SAMPLE, "interpolation.txt")
        .build()?;

    let name = dataset.target_names[target.index()];
    println!(
        "Dataset: {} samples, {} features, predicting {}",
        dataset.features.rows, dataset.features.cols, name
    );

    // --- Split and scale ---
    let split = train_test_split(&dataset.features, &dataset.targets, 0.2, SPLIT_SEED);

    let scaler = StandardScaler::fit(&split.train_features);
    let x_train = scaler.transform(&split.train_features);
    let x_test = scaler.transform(&split.test_features);

    // Targets are normalized by the training-set maximum; predictions are
    // scaled back up before reporting.
    let y_train_raw = split.train_targets.column(target.index());
    let y_test_raw = split.test_targets.column(target.index());
    let max_y = y_train_raw.iter().cloned().fold(f64::MIN, f64::max);
    let y_train: Vec<f64> = y_train_raw.iter().map(|y| y / max_y).collect();

    // --- Fit ---
    let mut net = Regressor::new(x_train.cols, 300, NOISE_SEED);
    let config = FitConfig::default();
    println!(
        "Training for {} epochs (lr {}, validation fraction {})...",
        config.epochs, config.learning_rate, config.validation_fraction
    );
    let history = net.fit(&x_train, &y_train, &config);

    let mut epochs_file = File::create("epochs.txt")?;
    for record in &history {
        writeln!(
            epochs_file,
            "{} {} {}",
            record.epoch,
            record.train_mae * max_y,
            record.val_mae.map_or(f64::NAN, |v| v * max_y),
        )?;
    }

    // --- Evaluate ---
    let y_fit: Vec<f64> = net.predict(&x_train).iter().map(|p| p * max_y).collect();
    let y_pred: Vec<f64> = net.predict(&x_test).iter().map(|p| p * max_y).collect();

    let mut predictions_file = File::create("predictions.txt")?;
    for (actual, predicted) in y_train_raw.iter().zip(y_fit.iter()) {
        writeln!(predictions_file, "train {} {}", actual, predicted)?;
    }
    for (actual, predicted) in y_test_raw.iter().zip(y_pred.iter()) {
        writeln!(predictions_file, "test {} {}", actual, predicted)?;
    }

    let test_mae = mae(&y_test_raw, &y_pred);
    println!("Train MAE: {:.4}", mae(&y_train_raw, &y_fit));
    println!("Test  MAE: {:.4}", test_mae);

    net.save_json("model.json")?;
    println!("Model saved to model.json");

    Ok(())
}

fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    let total: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();
    total / actual.len() as f64
}
